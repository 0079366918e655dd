mod json_repository;
mod traits;

pub use json_repository::JsonContactRepository;
pub use traits::{ContactField, ContactRepository};
