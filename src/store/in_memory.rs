//! InMemoryRecordStore - Vec-backed record store shared behind a lock.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use super::RecordStore;
use crate::error::StoreError;
use crate::record::{Record, RecordFields};

/// In-memory record store backed by an ordered `Vec`.
///
/// Clone-friendly via Arc: clones share the same records. Every mutation,
/// including its uniqueness and existence checks, runs under a single write
/// lock.
#[derive(Clone, Default)]
pub struct InMemoryRecordStore {
    records: Arc<RwLock<Vec<Record>>>,
}

impl InMemoryRecordStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the three sample students the demo client
    /// expects to find on a fresh server.
    pub fn with_sample_data() -> Result<Self, StoreError> {
        let store = Self::new();
        for fields in sample_students() {
            store.add(fields)?;
        }
        Ok(store)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Record>>, StoreError> {
        self.records
            .read()
            .map_err(|_| StoreError::LockPoisoned("read"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Record>>, StoreError> {
        self.records
            .write()
            .map_err(|_| StoreError::LockPoisoned("write"))
    }
}

impl RecordStore for InMemoryRecordStore {
    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.len())
    }

    fn list_all(&self) -> Result<Vec<Record>, StoreError> {
        Ok(self.read()?.clone())
    }

    fn find_by_name(&self, query: &str) -> Result<Record, StoreError> {
        let needle = query.to_lowercase();
        self.read()?
            .iter()
            .find(|record| record.name.to_lowercase().contains(&needle))
            .cloned()
            .ok_or_else(|| StoreError::NotFoundByName(query.to_string()))
    }

    fn add(&self, fields: RecordFields) -> Result<Record, StoreError> {
        let mut records = self.write()?;

        if records.iter().any(|record| record.mail == fields.mail) {
            return Err(StoreError::DuplicateEmail(fields.mail));
        }

        let record = Record::from_fields(Uuid::new_v4().to_string(), fields);
        records.push(record.clone());
        tracing::debug!(id = %record.id, total = records.len(), "record appended");

        Ok(record)
    }

    fn update(&self, id: &str, fields: RecordFields) -> Result<Record, StoreError> {
        let mut records = self.write()?;

        let index = records
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if records
            .iter()
            .any(|record| record.mail == fields.mail && record.id != id)
        {
            return Err(StoreError::EmailInUse(fields.mail));
        }

        let record = &mut records[index];
        record.apply(fields);
        tracing::debug!(id, index, "record replaced");

        Ok(record.clone())
    }

    fn delete(&self, id: &str) -> Result<Record, StoreError> {
        let mut records = self.write()?;

        let index = records
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let removed = records.remove(index);
        tracing::debug!(id, total = records.len(), "record removed");

        Ok(removed)
    }
}

fn sample_students() -> [RecordFields; 3] {
    [
        RecordFields::new("Juan", "Pérez", "juan.perez@email.com")
            .with_phone("+54 11 1234-5678")
            .with_street("Av. Corrientes 1234")
            .with_city("Buenos Aires"),
        RecordFields::new("María", "García", "maria.garcia@email.com")
            .with_phone("+54 11 8765-4321")
            .with_street("Calle San Martín 567")
            .with_city("Córdoba"),
        RecordFields::new("Carlos", "López", "carlos.lopez@email.com")
            .with_street("Av. Rivadavia 890")
            .with_city("Rosario"),
    ]
}
