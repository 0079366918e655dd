//! Domain value objects and types.
//!
//! Type-safe wrappers and pure domain logic: contact identifiers, the
//! country calling-code table, and the view-mode selection the front-end
//! drives the contact book with.

pub mod code_table;
pub mod contact_id;
pub mod view;

pub use code_table::CodeTable;
pub use contact_id::ContactId;
pub use view::ViewMode;
