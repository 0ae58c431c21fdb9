//! Service — command handler registry and dispatch for microsvc.
//!
//! `Service<F>` holds a facade and a set of named command handlers.
//! Each handler receives a `Context<F>` and returns `Result<Value, HandlerError>`.
//!
//! ## Example
//!
//! ```ignore
//! use student_registry::{microsvc, InMemoryRecordStore, RecordFacade};
//! use serde_json::json;
//!
//! let service = microsvc::Service::new(RecordFacade::new(InMemoryRecordStore::new()))
//!     .command("student.count", |ctx| {
//!         Ok(serde_json::to_value(ctx.facade().count()?)?)
//!     });
//!
//! let result = service.dispatch("student.count", json!({}));
//! ```

use std::collections::HashMap;

use serde_json::Value;

use super::context::Context;
use super::error::HandlerError;

type Handler<F> = Box<dyn Fn(&Context<F>) -> Result<Value, HandlerError> + Send + Sync>;

/// A microservice that routes commands to handler functions.
pub struct Service<F> {
    facade: F,
    handlers: HashMap<&'static str, Handler<F>>,
}

impl<F: Send + Sync + 'static> Service<F> {
    /// Create a new service dispatching to the given facade.
    pub fn new(facade: F) -> Self {
        Self {
            facade,
            handlers: HashMap::new(),
        }
    }

    /// Register a command handler. A later registration under the same name
    /// replaces the earlier one.
    pub fn command<H>(mut self, name: &'static str, handler: H) -> Self
    where
        H: Fn(&Context<F>) -> Result<Value, HandlerError> + Send + Sync + 'static,
    {
        self.handlers.insert(name, Box::new(handler));
        self
    }

    /// Dispatch a command by name.
    pub fn dispatch(&self, command: &str, input: Value) -> Result<Value, HandlerError> {
        let handler = self
            .handlers
            .get(command)
            .ok_or_else(|| HandlerError::UnknownCommand(command.to_string()))?;

        let result = handler(&Context::new(input, &self.facade));
        if let Err(err) = &result {
            tracing::debug!(command, error = %err, "command failed");
        }
        result
    }

    /// List registered command names, sorted.
    pub fn commands(&self) -> Vec<&'static str> {
        let mut commands: Vec<&'static str> = self.handlers.keys().copied().collect();
        commands.sort_unstable();
        commands
    }

    /// Get a reference to the facade.
    pub fn facade(&self) -> &F {
        &self.facade
    }
}
