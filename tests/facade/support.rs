//! Shared helpers for facade tests.

use student_registry::facade::AddRequest;
use student_registry::{InMemoryRecordStore, RecordFacade, RecordFields};

pub type Facade = RecordFacade<InMemoryRecordStore>;

pub fn empty_facade() -> Facade {
    RecordFacade::new(InMemoryRecordStore::new())
}

pub fn ana() -> AddRequest {
    RecordFields::new("Ana", "Gomez", "a@x.com").into()
}

pub fn student(name: &str, mail: &str) -> AddRequest {
    RecordFields::new(name, "Tester", mail).into()
}
