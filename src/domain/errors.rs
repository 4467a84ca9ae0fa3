//! Domain validation errors.

use std::fmt;

/// The contact field a validation rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ContactId,
    FirstName,
    LastName,
    PhoneNumber,
    Address,
}

impl Field {
    /// Name of the field as it appears in serialized contacts and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContactId => "contactId",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::PhoneNumber => "phoneNumber",
            Self::Address => "address",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field value was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationReason {
    /// The value was absent.
    NullValue,

    /// The value is longer than the allowed maximum.
    TooLong { max: usize },

    /// The value does not have the exact required length.
    WrongLength { expected: usize },

    /// The value contains a character that is not a decimal digit.
    NonDigit,
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullValue => write!(f, "Value cannot be null"),
            Self::TooLong { max } => write!(f, "Length must be <= {}", max),
            Self::WrongLength { expected } => write!(f, "Length must be {}", expected),
            Self::NonDigit => write!(f, "Only digits allowed"),
        }
    }
}

/// A field value that violated its constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    field: Field,
    reason: ValidationReason,
}

impl ValidationError {
    pub fn new(field: Field, reason: ValidationReason) -> Self {
        Self { field, reason }
    }

    /// The field that failed to validate.
    pub fn field(&self) -> Field {
        self.field
    }

    /// The rule the value broke.
    pub fn reason(&self) -> ValidationReason {
        self.reason
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

impl std::error::Error for ValidationError {}
