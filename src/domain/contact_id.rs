//! ContactId value object.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// A type-safe wrapper for store-assigned contact identifiers.
///
/// Identifiers are opaque strings assigned by the backing collection on
/// insert; this wrapper guarantees they are never empty.
///
/// # Example
///
/// ```
/// use arcade_contacts::domain::ContactId;
///
/// let id = ContactId::new("5f3a9c").unwrap();
/// assert_eq!(id.as_str(), "5f3a9c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactId(String);

/// Error returned when a contact identifier is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyIdError;

impl fmt::Display for EmptyIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "contact id cannot be empty")
    }
}

impl std::error::Error for EmptyIdError {}

impl ContactId {
    /// Create a new ContactId, validating that it's not empty.
    pub fn new(id: impl Into<String>) -> Result<Self, EmptyIdError> {
        let id = id.into();
        if id.is_empty() {
            return Err(EmptyIdError);
        }
        Ok(Self(id))
    }

    /// Generate a fresh random identifier (UUID v4).
    ///
    /// Used by store implementations when inserting a new record.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for ContactId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for ContactId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactId::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
