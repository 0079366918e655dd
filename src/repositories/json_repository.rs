use crate::domain::ContactId;
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, NewContact};
use crate::repositories::traits::{ContactField, ContactRepository};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Contact collection persisted as a single JSON document file.
///
/// The whole collection is read once at open and held in memory; every
/// mutation rewrites the file through a temp-file-then-rename, so each
/// operation lands atomically or not at all. A missing file opens as an
/// empty collection.
pub struct JsonContactRepository {
    path: PathBuf,
    documents: Vec<Contact>,
}

impl JsonContactRepository {
    /// Open the collection at `path`, reading existing records if present.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let documents = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err.into()),
        };
        debug!(
            path = %path.display(),
            records = documents.len(),
            "opened contact collection"
        );
        Ok(Self { path, documents })
    }

    /// Rewrite the collection file with the current documents.
    fn persist(&self) -> StoreResult<()> {
        let tmp = self.path.with_extension("tmp");
        let raw = serde_json::to_string_pretty(&self.documents)?;
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn position(&self, id: &ContactId) -> StoreResult<usize> {
        self.documents
            .iter()
            .position(|doc| &doc.id == id)
            .ok_or_else(|| StoreError::UnknownId(id.to_string()))
    }
}

impl ContactRepository for JsonContactRepository {
    fn insert(&mut self, record: &NewContact) -> StoreResult<ContactId> {
        let id = ContactId::generate();
        self.documents.push(record.clone().with_id(id.clone()));
        if let Err(err) = self.persist() {
            // Keep memory and file in step when the write did not land.
            self.documents.pop();
            return Err(err);
        }
        debug!(%id, "inserted contact record");
        Ok(id)
    }

    fn find_all(&self) -> StoreResult<Vec<Contact>> {
        Ok(self.documents.clone())
    }

    fn delete_by_id(&mut self, id: &ContactId) -> StoreResult<()> {
        let index = self.position(id)?;
        self.documents.remove(index);
        self.persist()?;
        debug!(%id, "deleted contact record");
        Ok(())
    }

    fn update_field(
        &mut self,
        id: &ContactId,
        field: ContactField,
        value: &str,
    ) -> StoreResult<()> {
        let index = self.position(id)?;
        {
            let doc = &mut self.documents[index];
            match field {
                ContactField::Name => doc.name = value.to_string(),
                ContactField::Phone => doc.phone = value.to_string(),
                ContactField::Email => doc.email = value.to_string(),
            }
        }
        self.persist()?;
        debug!(%id, field = field.as_str(), "updated contact field");
        Ok(())
    }
}
