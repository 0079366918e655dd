//! Service layer.

pub mod contact_book;

pub use contact_book::ContactBook;
