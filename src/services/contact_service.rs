//! Contact service layer.
//!
//! Business logic for adding, updating, deleting and looking up contacts on
//! top of any [`ContactRepository`].

use crate::config::Config;
use crate::domain::ContactValidator;
use crate::error::{ContactError, ContactResult};
use crate::models::Contact;
use crate::repositories::{ArrayContactRepository, ContactRepository};
use tracing::{trace, warn};

/// Parameters for a partial contact update.
///
/// `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

/// Orchestrates contact operations over a repository.
///
/// Repository and validation failures propagate to the caller unchanged;
/// the service only adds logging.
pub struct ContactService {
    repo: Box<dyn ContactRepository>,
    validator: ContactValidator,
}

impl Default for ContactService {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactService {
    /// Create a service backed by an [`ArrayContactRepository`] of default capacity.
    pub fn new() -> Self {
        Self::with_repository(Box::new(ArrayContactRepository::new()))
    }

    /// Create a service backed by an array repository sized from `config`.
    pub fn with_config(config: &Config) -> Self {
        Self::with_repository(Box::new(ArrayContactRepository::with_capacity(
            config.max_contacts,
        )))
    }

    /// Create a service over the given repository.
    pub fn with_repository(repo: Box<dyn ContactRepository>) -> Self {
        Self {
            repo,
            validator: ContactValidator::default(),
        }
    }

    pub fn builder() -> ContactServiceBuilder {
        ContactServiceBuilder::default()
    }

    /// The backing repository.
    pub fn repository(&self) -> &dyn ContactRepository {
        self.repo.as_ref()
    }

    /// Number of contacts currently stored.
    pub fn size(&self) -> usize {
        self.repo.size()
    }

    /// Add a new contact. The repository enforces unique ids and capacity.
    pub fn add_contact(&mut self, contact: Contact) -> ContactResult<()> {
        trace!(contact_id = %contact.contact_id(), "Adding contact");
        self.repo.add(contact)
    }

    /// Delete a contact by id. Fails with `NotFound` if the id is absent.
    pub fn delete_contact(&mut self, contact_id: &str) -> ContactResult<()> {
        trace!(contact_id = %contact_id, "Deleting contact");
        self.repo.delete_by_id(contact_id)
    }

    /// Update the fields present in `update`.
    ///
    /// The id format is validated before the lookup. Fields are applied one
    /// at a time in the order first name, last name, phone number, address,
    /// each through the contact's own setter. If a later field is rejected,
    /// the fields before it stay applied.
    pub fn update_contact(&mut self, contact_id: &str, update: ContactUpdate) -> ContactResult<()> {
        trace!(contact_id = %contact_id, "Updating contact");
        self.validator.validate_id(Some(contact_id))?;

        let contact = match self.repo.find_by_id_mut(contact_id) {
            Some(contact) => contact,
            None => {
                warn!(contact_id = %contact_id, "Update failed; contact not found");
                return Err(ContactError::NotFound(contact_id.to_string()));
            }
        };

        if let Some(first_name) = update.first_name {
            contact.set_first_name(first_name)?;
        }
        if let Some(last_name) = update.last_name {
            contact.set_last_name(last_name)?;
        }
        if let Some(phone_number) = update.phone_number {
            contact.set_phone_number(phone_number)?;
        }
        if let Some(address) = update.address {
            contact.set_address(address)?;
        }

        Ok(())
    }

    /// Look up a contact by id. Never fails; a missing id is only logged.
    pub fn get_contact_by_id(&self, contact_id: &str) -> Option<&Contact> {
        let contact = self.repo.find_by_id(contact_id);
        if contact.is_none() {
            trace!(contact_id = %contact_id, "Contact not found");
        }
        contact
    }
}

/// Builder for a [`ContactService`] with an injected repository and validator.
#[derive(Default)]
pub struct ContactServiceBuilder {
    repo: Option<Box<dyn ContactRepository>>,
    validator: Option<ContactValidator>,
}

impl ContactServiceBuilder {
    pub fn repository(mut self, repo: Box<dyn ContactRepository>) -> Self {
        self.repo = Some(repo);
        self
    }

    /// Validator used for id checks in `update_contact`.
    pub fn validator(mut self, validator: ContactValidator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Build the service.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::InvalidArgument` if no repository was supplied.
    pub fn build(self) -> ContactResult<ContactService> {
        let repo = self
            .repo
            .ok_or_else(|| ContactError::InvalidArgument("Repository cannot be null".to_string()))?;

        Ok(ContactService {
            repo,
            validator: self.validator.unwrap_or_default(),
        })
    }
}
