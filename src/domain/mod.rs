//! Domain validation.
//!
//! This module contains the field rules every contact must satisfy and the
//! error types returned when a value breaks one of them.

pub mod errors;
pub mod validator;

pub use errors::{Field, ValidationError, ValidationReason};
pub use validator::{
    ContactValidator, MAX_ADDRESS_LENGTH, MAX_ID_LENGTH, MAX_NAME_LENGTH, PHONE_LENGTH,
};
