//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on contacts through a repository or service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// A field failed validation
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A contact with this id is already stored
    #[error("ID already exists: {0}")]
    DuplicateId(String),

    /// The repository is full
    #[error("Contact storage is full (capacity {capacity})")]
    CapacityExceeded { capacity: usize },

    /// No contact with this id is stored
    #[error("Contact id does not exist: {0}")]
    NotFound(String),

    /// An API was misused, e.g. a service built without a repository
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl ContactError {
    /// Whether the failure is an invalid-argument error: a duplicate or
    /// unknown id, or API misuse.
    ///
    /// Field validation failures form their own class and `CapacityExceeded`
    /// describes the state of the store, so neither counts.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::DuplicateId(_) | Self::NotFound(_) | Self::InvalidArgument(_)
        )
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
