use crate::domain::ContactId;
use crate::error::StoreResult;
use crate::models::{Contact, NewContact};

/// The writable fields of a stored contact record.
///
/// Field-level updates are addressed by this enum rather than by raw field
/// names, so a typo cannot silently target a nonexistent field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Phone,
    Email,
}

impl ContactField {
    /// The field name as stored in the document.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Phone => "phone",
            ContactField::Email => "email",
        }
    }
}

/// The backing persistent collection of contact records.
///
/// Provides abstraction over contact storage, enabling different
/// implementations (JSON document file, in-memory fake for tests). All
/// calls are blocking; the contact book invokes them strictly sequentially
/// from one thread.
pub trait ContactRepository {
    /// Insert one record; the store assigns and returns its identifier.
    fn insert(&mut self, record: &NewContact) -> StoreResult<ContactId>;

    /// Full scan of the collection, in store-defined order.
    fn find_all(&self) -> StoreResult<Vec<Contact>>;

    /// Remove the record with the given identifier.
    fn delete_by_id(&mut self, id: &ContactId) -> StoreResult<()>;

    /// Set one named field on the record with the given identifier.
    fn update_field(&mut self, id: &ContactId, field: ContactField, value: &str)
        -> StoreResult<()>;
}
