//! Contact model representing one person in the address book.

use crate::domain::ContactId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A persisted contact.
///
/// Every `Contact` carries the identifier the backing collection assigned
/// on insert; a record that has not been stored yet is a [`NewContact`].
/// Phone and email are opaque text, no format is enforced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Store-assigned unique identifier
    pub id: ContactId,

    /// Display name
    pub name: String,

    /// Phone number, free-form
    pub phone: String,

    /// Email address, free-form
    pub email: String,
}

/// A contact that has not been inserted into the backing collection yet
/// and therefore has no identifier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl NewContact {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Attach the identifier the store assigned, producing the persisted form.
    pub fn with_id(self, id: ContactId) -> Contact {
        Contact {
            id,
            name: self.name,
            phone: self.phone,
            email: self.email,
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {}, Phone: {}, Email: {}",
            self.name, self.phone, self.email
        )
    }
}
