//! RecordStore - ordered, in-process storage for student records.
//!
//! The store is the exclusive owner of every record. Callers receive clones;
//! the only way to change a record is through `add`, `update` and `delete`.

mod in_memory;

pub use in_memory::InMemoryRecordStore;

use crate::error::StoreError;
use crate::record::{Record, RecordFields};

/// Abstract storage for student records.
pub trait RecordStore: Send + Sync {
    /// Number of live records.
    fn count(&self) -> Result<usize, StoreError>;

    /// Snapshot of all records in insertion order.
    fn list_all(&self) -> Result<Vec<Record>, StoreError>;

    /// First record (in insertion order) whose `name` contains `query`,
    /// ignoring case. Fails with `NotFoundByName`.
    fn find_by_name(&self, query: &str) -> Result<Record, StoreError>;

    /// Append a new record with a freshly generated id. Fails with
    /// `DuplicateEmail` if any live record already uses `fields.mail`.
    fn add(&self, fields: RecordFields) -> Result<Record, StoreError>;

    /// Replace the mutable fields of the record with `id` in place. Fails with
    /// `NotFound`, or `EmailInUse` when another record holds `fields.mail`.
    fn update(&self, id: &str, fields: RecordFields) -> Result<Record, StoreError>;

    /// Remove the record with `id` and return it. Fails with `NotFound`.
    fn delete(&self, id: &str) -> Result<Record, StoreError>;
}
