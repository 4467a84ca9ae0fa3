//! Contact model representing a person in the contact book.

use crate::domain::{ContactValidator, ValidationError};
use serde::{Deserialize, Serialize};

/// A validated contact record.
///
/// Every field satisfies its rule at all times: the constructor validates all
/// five fields and each setter revalidates its argument before mutating. The
/// id cannot change after construction.
///
/// # Example
///
/// ```
/// use contact_book::Contact;
///
/// let mut contact = Contact::new("15555", "Bob", "Smith", "1234567890", "8850 West Mayfield")?;
/// contact.set_last_name("Blue")?;
/// assert_eq!(contact.last_name(), "Blue");
///
/// // Invalid values leave the contact untouched
/// assert!(contact.set_phone_number("555-1234").is_err());
/// assert_eq!(contact.phone_number(), "1234567890");
/// # Ok::<(), contact_book::domain::ValidationError>(())
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ContactInput")]
pub struct Contact {
    contact_id: String,
    first_name: String,
    last_name: String,
    phone_number: String,
    address: String,

    /// Validator used by the setters, so failures land in the same metrics
    /// instance the contact was built against.
    #[serde(skip)]
    validator: ContactValidator,
}

impl Contact {
    /// Create a contact, validating fields in order: id, first name, last
    /// name, phone number, address.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered; no contact is built.
    pub fn new(
        contact_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_validator(
            ContactValidator::default(),
            contact_id,
            first_name,
            last_name,
            phone_number,
            address,
        )
    }

    /// Create a contact that reports validation failures through `validator`.
    pub fn with_validator(
        validator: ContactValidator,
        contact_id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        ContactInput {
            contact_id: Some(contact_id.into()),
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            phone_number: Some(phone_number.into()),
            address: Some(address.into()),
        }
        .validate(validator)
    }

    pub fn contact_id(&self) -> &str {
        &self.contact_id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn set_first_name(&mut self, first_name: impl Into<String>) -> Result<(), ValidationError> {
        let first_name = first_name.into();
        self.validator.validate_first_name(Some(&first_name))?;
        self.first_name = first_name;
        Ok(())
    }

    pub fn set_last_name(&mut self, last_name: impl Into<String>) -> Result<(), ValidationError> {
        let last_name = last_name.into();
        self.validator.validate_last_name(Some(&last_name))?;
        self.last_name = last_name;
        Ok(())
    }

    pub fn set_phone_number(
        &mut self,
        phone_number: impl Into<String>,
    ) -> Result<(), ValidationError> {
        let phone_number = phone_number.into();
        self.validator.validate_phone(Some(&phone_number))?;
        self.phone_number = phone_number;
        Ok(())
    }

    pub fn set_address(&mut self, address: impl Into<String>) -> Result<(), ValidationError> {
        let address = address.into();
        self.validator.validate_address(Some(&address))?;
        self.address = address;
        Ok(())
    }
}

// Equality ignores which metrics instance the contact reports to
impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.contact_id == other.contact_id
            && self.first_name == other.first_name
            && self.last_name == other.last_name
            && self.phone_number == other.phone_number
            && self.address == other.address
    }
}

impl Eq for Contact {}

/// Unvalidated contact fields, any of which may be missing.
///
/// This is the shape contacts are deserialized from; converting it into a
/// [`Contact`] runs the full validator, so a missing field is reported as
/// `NullValue` instead of a serde error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactInput {
    pub contact_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

impl ContactInput {
    /// Validate every field and build the contact.
    pub fn validate(self, validator: ContactValidator) -> Result<Contact, ValidationError> {
        validator.validate_id(self.contact_id.as_deref())?;
        validator.validate_first_name(self.first_name.as_deref())?;
        validator.validate_last_name(self.last_name.as_deref())?;
        validator.validate_phone(self.phone_number.as_deref())?;
        validator.validate_address(self.address.as_deref())?;

        // All five were checked present above
        Ok(Contact {
            contact_id: self.contact_id.unwrap_or_default(),
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            phone_number: self.phone_number.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            validator,
        })
    }
}

impl TryFrom<ContactInput> for Contact {
    type Error = ValidationError;

    fn try_from(input: ContactInput) -> Result<Self, Self::Error> {
        input.validate(ContactValidator::default())
    }
}
