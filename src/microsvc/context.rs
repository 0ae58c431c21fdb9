//! Context passed to command handlers: the JSON input plus the facade.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::HandlerError;

/// Generic over `F`, the target the service dispatches to (a
/// [`RecordFacade`](crate::RecordFacade) in practice).
pub struct Context<'a, F> {
    input: Value,
    facade: &'a F,
}

impl<'a, F> Context<'a, F> {
    pub(crate) fn new(input: Value, facade: &'a F) -> Self {
        Self { input, facade }
    }

    /// Decode the input into a request type.
    pub fn input<T: DeserializeOwned>(&self) -> Result<T, HandlerError> {
        Ok(T::deserialize(&self.input)?)
    }

    pub fn facade(&self) -> &F {
        self.facade
    }
}
