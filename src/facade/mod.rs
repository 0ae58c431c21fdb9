//! facade — the request/response boundary over a [`RecordStore`].
//!
//! Every operation returns a response payload. Business outcomes (duplicate
//! email, unknown id, no name match, missing fields) are reported through the
//! payload's `found`/`success` flag and `message`; the `Err` side is reserved
//! for internal store failures, which transports map to internal errors.
//!
//! ## Example
//!
//! ```ignore
//! use student_registry::{InMemoryRecordStore, RecordFacade, RecordFields};
//!
//! let facade = RecordFacade::new(InMemoryRecordStore::new());
//! let added = facade.add(RecordFields::new("Ana", "Gomez", "a@x.com").into())?;
//! assert!(added.success);
//! ```

mod messages;

pub use messages::{
    AddRequest, AddResponse, CountResponse, DeleteRequest, DeleteResponse, FindRequest,
    FindResponse, ListResponse, RecordResponse, UpdateRequest, UpdateResponse,
};

use crate::error::StoreError;
use crate::store::RecordStore;
use messages::missing_message;

/// Exposes the six store operations as request/response handlers.
///
/// Cloning the facade clones the store handle, so clones of a facade over
/// [`InMemoryRecordStore`](crate::InMemoryRecordStore) serve the same records.
#[derive(Clone)]
pub struct RecordFacade<S> {
    store: S,
}

impl<S: RecordStore> RecordFacade<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn count(&self) -> Result<CountResponse, StoreError> {
        let count = self.store.count()?;
        tracing::info!(count, "counted students");
        Ok(CountResponse { count })
    }

    pub fn list_all(&self) -> Result<ListResponse, StoreError> {
        let records = self.store.list_all()?;
        tracing::info!(total = records.len(), "listed students");
        Ok(ListResponse { records })
    }

    pub fn find_by_name(&self, request: FindRequest) -> Result<FindResponse, StoreError> {
        if request.name.trim().is_empty() {
            return Ok(FindResponse::not_found(missing_message(&["name"])));
        }

        tracing::info!(query = %request.name, "searching student by name");
        match business(self.store.find_by_name(&request.name))? {
            Ok(record) => Ok(FindResponse {
                message: format!("student found: {}", record.full_name()),
                record: Some(record),
                found: true,
            }),
            Err(err) => {
                tracing::info!(query = %request.name, "no student matched");
                Ok(FindResponse::not_found(err.to_string()))
            }
        }
    }

    pub fn add(&self, request: AddRequest) -> Result<AddResponse, StoreError> {
        let missing = request.missing_fields();
        if !missing.is_empty() {
            return Ok(RecordResponse::rejected(missing_message(&missing)));
        }

        tracing::info!(name = %request.name, lastname = %request.lastname, "adding student");
        match business(self.store.add(request.into()))? {
            Ok(record) => {
                tracing::info!(id = %record.id, "student added");
                Ok(RecordResponse {
                    message: format!("student {} added", record.full_name()),
                    record: Some(record),
                    success: true,
                })
            }
            Err(err) => {
                tracing::warn!(error = %err, "add rejected");
                Ok(RecordResponse::rejected(err.to_string()))
            }
        }
    }

    pub fn update(&self, request: UpdateRequest) -> Result<UpdateResponse, StoreError> {
        let missing = request.missing_fields();
        if !missing.is_empty() {
            return Ok(RecordResponse::rejected(missing_message(&missing)));
        }

        tracing::info!(id = %request.id, "updating student");
        match business(self.store.update(&request.id, request.fields.into()))? {
            Ok(record) => Ok(RecordResponse {
                message: format!("student {} updated", record.full_name()),
                record: Some(record),
                success: true,
            }),
            Err(err) => {
                tracing::warn!(id = %request.id, error = %err, "update rejected");
                Ok(RecordResponse::rejected(err.to_string()))
            }
        }
    }

    pub fn delete(&self, request: DeleteRequest) -> Result<DeleteResponse, StoreError> {
        if request.id.trim().is_empty() {
            return Ok(DeleteResponse {
                success: false,
                message: missing_message(&["id"]),
            });
        }

        tracing::info!(id = %request.id, "deleting student");
        match business(self.store.delete(&request.id))? {
            Ok(removed) => Ok(DeleteResponse {
                success: true,
                message: format!("student {} deleted", removed.full_name()),
            }),
            Err(err) => {
                tracing::warn!(id = %request.id, error = %err, "delete rejected");
                Ok(DeleteResponse {
                    success: false,
                    message: err.to_string(),
                })
            }
        }
    }
}

/// Split internal failures (outer `Err`) from business outcomes (inner result).
fn business<T>(result: Result<T, StoreError>) -> Result<Result<T, StoreError>, StoreError> {
    match result {
        Err(err) if err.is_internal() => Err(err),
        other => Ok(other),
    }
}
