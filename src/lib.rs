//! Arcade Contacts - a small contact book with country-code filtering.
//!
//! The library keeps an ordered in-memory contact list synchronized with a
//! backing persistent collection and offers add/find/update/delete plus
//! name sorting and filtering by phone country code. Storage sits behind
//! the [`repositories::ContactRepository`] trait; a JSON document file
//! implementation ships with the crate, and tests run against an
//! in-memory fake.
//!
//! # Architecture
//!
//! - **domain**: value objects and pure logic (ids, code table, view modes)
//! - **models**: contact record types
//! - **repositories**: the storage capability and its implementations
//! - **services**: the [`services::ContactBook`] working set
//! - **config**: configuration from environment variables
//! - **error**: custom error types for precise error handling

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use domain::{CodeTable, ContactId, ViewMode};
pub use error::{ConfigError, StoreError};
pub use models::{Contact, NewContact};
pub use repositories::{ContactField, ContactRepository, JsonContactRepository};
pub use services::ContactBook;
