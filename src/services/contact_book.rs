//! The contact book: an in-memory working set synchronized with a backing
//! persistent collection.

use crate::domain::CodeTable;
use crate::error::StoreResult;
use crate::models::{Contact, NewContact};
use crate::repositories::{ContactField, ContactRepository};
use tracing::{debug, info};

/// Ordered collection of contacts, mirrored from the backing store.
///
/// The book exclusively owns both the in-memory sequence and the storage
/// handle; the handle is acquired once at construction and released when
/// the book is dropped. Records keep insertion order until an explicit
/// [`sort_by_name`](ContactBook::sort_by_name); an explicit
/// [`load_all`](ContactBook::load_all) restores store order.
///
/// Adds and deletes hit the store first and mirror into memory after, so
/// a failed store call never leaves a phantom record in the working set.
/// Field updates are written per field, not as one atomic record write.
pub struct ContactBook {
    repository: Box<dyn ContactRepository>,
    code_table: CodeTable,
    contacts: Vec<Contact>,
}

impl ContactBook {
    /// Open a book over the given storage handle and load every record.
    pub fn open(repository: Box<dyn ContactRepository>, code_table: CodeTable) -> StoreResult<Self> {
        let mut book = Self {
            repository,
            code_table,
            contacts: Vec::new(),
        };
        book.load_all()?;
        Ok(book)
    }

    /// Discard the in-memory sequence and repopulate it from the store,
    /// preserving the store's iteration order.
    pub fn load_all(&mut self) -> StoreResult<()> {
        self.contacts = self.repository.find_all()?;
        info!(records = self.contacts.len(), "loaded contacts from store");
        Ok(())
    }

    /// The current in-memory sequence.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// The calling-code table this book filters with.
    pub fn code_table(&self) -> &CodeTable {
        &self.code_table
    }

    /// Insert a new contact into the store, then append it to the
    /// in-memory sequence with the identifier the store assigned.
    ///
    /// If the store insert fails, no in-memory record appears.
    pub fn add(&mut self, name: &str, phone: &str, email: &str) -> StoreResult<&Contact> {
        let record = NewContact::new(name, phone, email);
        let id = self.repository.insert(&record)?;
        debug!(%id, name, "added contact");
        let index = self.contacts.len();
        self.contacts.push(record.with_id(id));
        Ok(&self.contacts[index])
    }

    /// Case-insensitive exact match on name; first match in current order.
    pub fn find(&self, name: &str) -> Option<&Contact> {
        let needle = name.to_lowercase();
        self.contacts
            .iter()
            .find(|c| c.name.to_lowercase() == needle)
    }

    /// Delete the first contact matching `name` (case-insensitive) from
    /// both the store and memory. Returns whether a match was removed;
    /// no store call is made when nothing matches.
    pub fn delete(&mut self, name: &str) -> StoreResult<bool> {
        let needle = name.to_lowercase();
        let Some(index) = self
            .contacts
            .iter()
            .position(|c| c.name.to_lowercase() == needle)
        else {
            return Ok(false);
        };
        let id = self.contacts[index].id.clone();
        self.repository.delete_by_id(&id)?;
        self.contacts.remove(index);
        debug!(%id, name, "deleted contact");
        Ok(true)
    }

    /// Update the contact found by `old_name`. Silently does nothing when
    /// no contact matches; callers check existence with
    /// [`find`](Self::find) first.
    ///
    /// The empty string is the do-not-change sentinel for each of the
    /// three new values. Each changed field is one independent store
    /// write; a failure mid-way leaves earlier fields applied.
    pub fn update(
        &mut self,
        old_name: &str,
        new_name: &str,
        new_phone: &str,
        new_email: &str,
    ) -> StoreResult<()> {
        let needle = old_name.to_lowercase();
        let Some(index) = self
            .contacts
            .iter()
            .position(|c| c.name.to_lowercase() == needle)
        else {
            return Ok(());
        };
        let id = self.contacts[index].id.clone();
        if !new_name.is_empty() {
            self.contacts[index].name = new_name.to_string();
            self.repository
                .update_field(&id, ContactField::Name, new_name)?;
        }
        if !new_phone.is_empty() {
            self.contacts[index].phone = new_phone.to_string();
            self.repository
                .update_field(&id, ContactField::Phone, new_phone)?;
        }
        if !new_email.is_empty() {
            self.contacts[index].email = new_email.to_string();
            self.repository
                .update_field(&id, ContactField::Email, new_email)?;
        }
        debug!(%id, old_name, "updated contact");
        Ok(())
    }

    /// Stably reorder the in-memory sequence ascending by name,
    /// case-insensitive. The order is never persisted; the next
    /// [`load_all`](ContactBook::load_all) discards it.
    pub fn sort_by_name(&mut self) {
        self.contacts.sort_by_key(|c| c.name.to_lowercase());
    }

    /// Contacts whose phone number carries exactly the given calling code,
    /// in current order. Pure read; `code` is taken as already normalized
    /// ("44", not "+44").
    pub fn filter_by_phone_code(&self, code: &str) -> Vec<&Contact> {
        self.contacts
            .iter()
            .filter(|c| self.code_table.extract_phone_code(&c.phone) == code)
            .collect()
    }
}
