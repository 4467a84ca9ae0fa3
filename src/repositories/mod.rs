mod array_contact_repository;
mod traits;

pub use array_contact_repository::{ArrayContactRepository, DEFAULT_CAPACITY};
pub use traits::ContactRepository;
