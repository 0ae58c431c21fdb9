use thiserror::Error;

/// Outcomes a [`RecordStore`](crate::RecordStore) reports instead of a record.
///
/// The first four are expected business results; the facade turns them into
/// response payloads. `LockPoisoned` is the only internal failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("a student is already registered with the email {0}")]
    DuplicateEmail(String),
    #[error("the email {0} is already used by another student")]
    EmailInUse(String),
    #[error("no student found with id {0}")]
    NotFound(String),
    #[error("no student found with a name matching \"{0}\"")]
    NotFoundByName(String),
    #[error("record store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

impl StoreError {
    /// True for failures that are not business-rule outcomes.
    pub fn is_internal(&self) -> bool {
        matches!(self, StoreError::LockPoisoned(_))
    }
}
