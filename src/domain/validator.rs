//! Field validation rules for contacts.
//!
//! Rules:
//! - contact id, first name, last name: present, at most 10 characters
//! - phone number: present, exactly 10 characters, all decimal digits
//! - address: present, at most 30 characters
//!
//! Lengths count Unicode scalar values and only ASCII `0-9` count as digits.
//!
//! Every rejected value is recorded in [`ValidationMetrics`] before the error
//! is returned.

use super::errors::{Field, ValidationError, ValidationReason};
use crate::metrics::ValidationMetrics;

/// Maximum length of a contact id.
pub const MAX_ID_LENGTH: usize = 10;

/// Maximum length of a first or last name.
pub const MAX_NAME_LENGTH: usize = 10;

/// Exact length of a phone number.
pub const PHONE_LENGTH: usize = 10;

/// Maximum length of an address.
pub const MAX_ADDRESS_LENGTH: usize = 30;

/// Validates contact fields and records failures.
///
/// The default validator reports to [`ValidationMetrics::global`]; use
/// [`ContactValidator::new`] to count failures in an isolated instance.
///
/// # Example
///
/// ```
/// use contact_book::domain::{ContactValidator, Field};
/// use contact_book::metrics::ValidationMetrics;
///
/// let metrics = ValidationMetrics::new();
/// let validator = ContactValidator::new(metrics.clone());
///
/// assert!(validator.validate_phone(Some("1234567890")).is_ok());
/// let err = validator.validate_phone(Some("12345")).unwrap_err();
/// assert_eq!(err.field(), Field::PhoneNumber);
/// assert_eq!(metrics.failure_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ContactValidator {
    metrics: ValidationMetrics,
}

impl Default for ContactValidator {
    fn default() -> Self {
        Self::new(ValidationMetrics::global().clone())
    }
}

impl ContactValidator {
    /// Create a validator that records failures into `metrics`.
    pub fn new(metrics: ValidationMetrics) -> Self {
        Self { metrics }
    }

    /// The metrics instance failures are recorded into.
    pub fn metrics(&self) -> &ValidationMetrics {
        &self.metrics
    }

    pub fn validate_id(&self, contact_id: Option<&str>) -> Result<(), ValidationError> {
        self.validate_max_length(Field::ContactId, contact_id, MAX_ID_LENGTH)
    }

    pub fn validate_first_name(&self, first_name: Option<&str>) -> Result<(), ValidationError> {
        self.validate_max_length(Field::FirstName, first_name, MAX_NAME_LENGTH)
    }

    pub fn validate_last_name(&self, last_name: Option<&str>) -> Result<(), ValidationError> {
        self.validate_max_length(Field::LastName, last_name, MAX_NAME_LENGTH)
    }

    /// Validate a phone number.
    ///
    /// Length is checked before content, so `"12a"` reports `WrongLength`
    /// rather than `NonDigit`.
    pub fn validate_phone(&self, phone_number: Option<&str>) -> Result<(), ValidationError> {
        let field = Field::PhoneNumber;
        let phone_number = self.require(field, phone_number)?;

        if phone_number.chars().count() != PHONE_LENGTH {
            return Err(self.fail(
                field,
                ValidationReason::WrongLength {
                    expected: PHONE_LENGTH,
                },
            ));
        }

        if !phone_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(self.fail(field, ValidationReason::NonDigit));
        }

        Ok(())
    }

    pub fn validate_address(&self, address: Option<&str>) -> Result<(), ValidationError> {
        self.validate_max_length(Field::Address, address, MAX_ADDRESS_LENGTH)
    }

    fn validate_max_length(
        &self,
        field: Field,
        value: Option<&str>,
        max: usize,
    ) -> Result<(), ValidationError> {
        let value = self.require(field, value)?;
        if value.chars().count() > max {
            return Err(self.fail(field, ValidationReason::TooLong { max }));
        }
        Ok(())
    }

    fn require<'a>(
        &self,
        field: Field,
        value: Option<&'a str>,
    ) -> Result<&'a str, ValidationError> {
        value.ok_or_else(|| self.fail(field, ValidationReason::NullValue))
    }

    fn fail(&self, field: Field, reason: ValidationReason) -> ValidationError {
        self.metrics.record_failure(field.as_str(), &reason.to_string());
        ValidationError::new(field, reason)
    }
}
