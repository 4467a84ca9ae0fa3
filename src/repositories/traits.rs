use crate::error::ContactResult;
use crate::models::Contact;

/// Repository for managing contacts.
///
/// Provides abstraction over contact storage, enabling different
/// implementations (array-backed, map-backed, test doubles). The repository
/// owns every stored contact; callers borrow them.
pub trait ContactRepository: Send {
    /// Number of contacts currently stored.
    fn size(&self) -> usize;

    /// Store a new contact.
    ///
    /// Fails with `DuplicateId` if the id is already present and with
    /// `CapacityExceeded` if the store is full.
    fn add(&mut self, contact: Contact) -> ContactResult<()>;

    /// Find a contact by id, or `None` if absent.
    fn find_by_id(&self, contact_id: &str) -> Option<&Contact>;

    /// Find a contact by id for in-place modification.
    fn find_by_id_mut(&mut self, contact_id: &str) -> Option<&mut Contact>;

    /// Remove a contact by id, failing with `NotFound` if absent.
    fn delete_by_id(&mut self, contact_id: &str) -> ContactResult<()>;
}
