use arcade_contacts::domain::ContactId;
use arcade_contacts::error::{StoreError, StoreResult};
use arcade_contacts::models::{Contact, NewContact};
use arcade_contacts::repositories::{ContactField, ContactRepository};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// In-memory implementation of `ContactRepository` that can be seeded with
/// records, tracks method calls for verification, and can be told to fail
/// named methods to exercise store-failure paths. Internally shared, so a
/// clone kept by the test still observes calls made through the clone
/// handed to the contact book.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    records: Arc<Mutex<Vec<Contact>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    failing: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the repository with a record, bypassing call tracking.
    pub fn seed(&self, name: &str, phone: &str, email: &str) -> ContactId {
        let id = ContactId::generate();
        let contact = NewContact::new(name, phone, email).with_id(id.clone());
        self.records.lock().unwrap().push(contact);
        id
    }

    /// Current records, in store order.
    pub fn records(&self) -> Vec<Contact> {
        self.records.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Make the named method fail from now on.
    pub fn fail_on(&self, method: &str) {
        self.failing.lock().unwrap().push(method.to_string());
    }

    fn track_call(&self, method: &str) -> StoreResult<()> {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
        if self.failing.lock().unwrap().iter().any(|m| m == method) {
            return Err(StoreError::Other(format!("injected failure in {method}")));
        }
        Ok(())
    }

    fn position(&self, id: &ContactId) -> StoreResult<usize> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| StoreError::UnknownId(id.to_string()))
    }
}

impl ContactRepository for MockContactRepository {
    fn insert(&mut self, record: &NewContact) -> StoreResult<ContactId> {
        self.track_call("insert")?;
        let id = ContactId::generate();
        self.records
            .lock()
            .unwrap()
            .push(record.clone().with_id(id.clone()));
        Ok(id)
    }

    fn find_all(&self) -> StoreResult<Vec<Contact>> {
        self.track_call("find_all")?;
        Ok(self.records.lock().unwrap().clone())
    }

    fn delete_by_id(&mut self, id: &ContactId) -> StoreResult<()> {
        self.track_call("delete_by_id")?;
        let index = self.position(id)?;
        self.records.lock().unwrap().remove(index);
        Ok(())
    }

    fn update_field(
        &mut self,
        id: &ContactId,
        field: ContactField,
        value: &str,
    ) -> StoreResult<()> {
        self.track_call("update_field")?;
        let index = self.position(id)?;
        let mut records = self.records.lock().unwrap();
        let record = &mut records[index];
        match field {
            ContactField::Name => record.name = value.to_string(),
            ContactField::Phone => record.phone = value.to_string(),
            ContactField::Email => record.email = value.to_string(),
        }
        Ok(())
    }
}
