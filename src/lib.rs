//! Contact Book - an in-memory contact management library.
//!
//! Stores validated contact records (id, name, phone, address) and supports
//! create/read/update/delete through a service layer backed by a swappable
//! storage abstraction.
//!
//! # Architecture
//!
//! - **domain**: Field rules and validation errors
//! - **metrics**: Thread-safe validation failure counter
//! - **models**: The validated `Contact` record
//! - **repositories**: Storage trait and the array-backed implementation
//! - **services**: Business operations over a repository
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod models;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use domain::{ContactValidator, Field, ValidationError, ValidationReason};
pub use error::{ConfigError, ContactError, ContactResult};
pub use metrics::ValidationMetrics;
pub use models::{Contact, ContactInput};
pub use repositories::{ArrayContactRepository, ContactRepository};
pub use services::{ContactService, ContactServiceBuilder, ContactUpdate};
