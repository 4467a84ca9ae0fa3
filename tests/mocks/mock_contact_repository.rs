use contact_book::error::{ContactError, ContactResult};
use contact_book::models::Contact;
use contact_book::repositories::ContactRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Map-backed mock contact repository for testing.
///
/// Stores contacts in a HashMap keyed by id and tracks method calls. Call
/// counts live behind a shared handle, so a clone kept by the test still sees
/// calls made after the repository was moved into a service.
#[allow(dead_code)]
pub struct MockContactRepository {
    contacts: HashMap<String, Contact>,
    capacity: usize,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::with_capacity(usize::MAX)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            contacts: HashMap::new(),
            capacity,
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Handle for reading call counts after the mock is moved.
    pub fn call_counter(&self) -> CallCounter {
        CallCounter(self.call_counts.clone())
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared view of a mock's call counts.
#[allow(dead_code)]
#[derive(Clone)]
pub struct CallCounter(Arc<Mutex<HashMap<String, usize>>>);

#[allow(dead_code)]
impl CallCounter {
    /// Get the number of times a method was called.
    pub fn get(&self, method: &str) -> usize {
        let counts = self.0.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }
}

impl ContactRepository for MockContactRepository {
    fn size(&self) -> usize {
        self.track_call("size");
        self.contacts.len()
    }

    fn add(&mut self, contact: Contact) -> ContactResult<()> {
        self.track_call("add");

        if self.contacts.contains_key(contact.contact_id()) {
            return Err(ContactError::DuplicateId(contact.contact_id().to_string()));
        }
        if self.contacts.len() >= self.capacity {
            return Err(ContactError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        self.contacts
            .insert(contact.contact_id().to_string(), contact);
        Ok(())
    }

    fn find_by_id(&self, contact_id: &str) -> Option<&Contact> {
        self.track_call("find_by_id");
        self.contacts.get(contact_id)
    }

    fn find_by_id_mut(&mut self, contact_id: &str) -> Option<&mut Contact> {
        self.track_call("find_by_id_mut");
        self.contacts.get_mut(contact_id)
    }

    fn delete_by_id(&mut self, contact_id: &str) -> ContactResult<()> {
        self.track_call("delete_by_id");
        self.contacts
            .remove(contact_id)
            .map(|_| ())
            .ok_or_else(|| ContactError::NotFound(contact_id.to_string()))
    }
}
