use crate::error::{ContactError, ContactResult};
use crate::models::Contact;
use crate::repositories::traits::ContactRepository;

/// Default number of contacts an array-backed repository holds.
pub const DEFAULT_CAPACITY: usize = 100;

/// Contact repository backed by a capacity-bounded, insertion-ordered array.
///
/// All lookups are linear scans. Deleting shifts the following contacts left
/// by one, so the store stays dense and keeps insertion order.
#[derive(Debug, Clone)]
pub struct ArrayContactRepository {
    contacts: Vec<Contact>,
    capacity: usize,
}

impl Default for ArrayContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ArrayContactRepository {
    /// Create an empty repository holding up to [`DEFAULT_CAPACITY`] contacts.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty repository holding up to `capacity` contacts.
    ///
    /// `capacity` is a limit, not an allocation size; storage grows on demand.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            contacts: Vec::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
        }
    }

    /// Maximum number of contacts this repository accepts.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Stored contacts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Contact> {
        self.contacts.iter()
    }

    fn position(&self, contact_id: &str) -> Option<usize> {
        self.contacts
            .iter()
            .position(|contact| contact.contact_id() == contact_id)
    }
}

impl ContactRepository for ArrayContactRepository {
    fn size(&self) -> usize {
        self.contacts.len()
    }

    fn add(&mut self, contact: Contact) -> ContactResult<()> {
        if self.position(contact.contact_id()).is_some() {
            return Err(ContactError::DuplicateId(contact.contact_id().to_string()));
        }

        if self.contacts.len() >= self.capacity {
            return Err(ContactError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.contacts.push(contact);
        Ok(())
    }

    fn find_by_id(&self, contact_id: &str) -> Option<&Contact> {
        self.contacts
            .iter()
            .find(|contact| contact.contact_id() == contact_id)
    }

    fn find_by_id_mut(&mut self, contact_id: &str) -> Option<&mut Contact> {
        self.contacts
            .iter_mut()
            .find(|contact| contact.contact_id() == contact_id)
    }

    fn delete_by_id(&mut self, contact_id: &str) -> ContactResult<()> {
        match self.position(contact_id) {
            Some(index) => {
                // Vec::remove shifts the tail left, preserving order
                self.contacts.remove(index);
                Ok(())
            }
            None => Err(ContactError::NotFound(contact_id.to_string())),
        }
    }
}
