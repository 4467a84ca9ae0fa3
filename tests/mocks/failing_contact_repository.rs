use contact_book::error::{ContactError, ContactResult};
use contact_book::models::Contact;
use contact_book::repositories::ContactRepository;

/// Repository that rejects every write and never finds anything.
///
/// Used to verify that the service propagates storage failures unchanged.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct FailingContactRepository;

impl ContactRepository for FailingContactRepository {
    fn size(&self) -> usize {
        0
    }

    fn add(&mut self, _contact: Contact) -> ContactResult<()> {
        Err(ContactError::InvalidArgument("Simulated failure".to_string()))
    }

    fn find_by_id(&self, _contact_id: &str) -> Option<&Contact> {
        None
    }

    fn find_by_id_mut(&mut self, _contact_id: &str) -> Option<&mut Contact> {
        None
    }

    fn delete_by_id(&mut self, contact_id: &str) -> ContactResult<()> {
        Err(ContactError::NotFound(contact_id.to_string()))
    }
}
