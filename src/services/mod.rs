//! Application service layer.
//!
//! Services contain business logic and orchestrate interactions with
//! repositories. They provide a clean boundary between callers and the
//! storage layer.

mod contact_service;

pub use contact_service::{ContactService, ContactServiceBuilder, ContactUpdate};
