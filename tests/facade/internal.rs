//! Internal store failures surface as `Err`, never as a business response.

use student_registry::facade::{DeleteRequest, FindRequest};
use student_registry::{Record, RecordFacade, RecordFields, RecordStore, StoreError};

use crate::support::ana;

/// A store whose lock is always poisoned.
struct PoisonedStore;

impl RecordStore for PoisonedStore {
    fn count(&self) -> Result<usize, StoreError> {
        Err(StoreError::LockPoisoned("read"))
    }

    fn list_all(&self) -> Result<Vec<Record>, StoreError> {
        Err(StoreError::LockPoisoned("read"))
    }

    fn find_by_name(&self, _query: &str) -> Result<Record, StoreError> {
        Err(StoreError::LockPoisoned("read"))
    }

    fn add(&self, _fields: RecordFields) -> Result<Record, StoreError> {
        Err(StoreError::LockPoisoned("write"))
    }

    fn update(&self, _id: &str, _fields: RecordFields) -> Result<Record, StoreError> {
        Err(StoreError::LockPoisoned("write"))
    }

    fn delete(&self, _id: &str) -> Result<Record, StoreError> {
        Err(StoreError::LockPoisoned("write"))
    }
}

#[test]
fn poisoned_store_errors_propagate() {
    let facade = RecordFacade::new(PoisonedStore);

    assert_eq!(facade.count().unwrap_err(), StoreError::LockPoisoned("read"));
    assert!(facade.list_all().is_err());
    assert!(facade.find_by_name(FindRequest::new("Ana")).is_err());
    assert_eq!(facade.add(ana()).unwrap_err(), StoreError::LockPoisoned("write"));
    assert!(facade.delete(DeleteRequest::new("r1")).is_err());
}

#[test]
fn validation_still_answers_without_touching_the_store() {
    let facade = RecordFacade::new(PoisonedStore);

    let response = facade.delete(DeleteRequest::default()).unwrap();
    assert!(!response.success);
}
