//! microsvc — command dispatch and network transports for the record facade.
//!
//! Commands are registered by name on a `Service`. Each handler receives a
//! `Context<F>` with access to the JSON input and the facade.
//!
//! ## Quick Start
//!
//! ```ignore
//! use student_registry::{microsvc, InMemoryRecordStore, RecordFacade};
//! use serde_json::json;
//!
//! let service = microsvc::handlers::register(RecordFacade::new(InMemoryRecordStore::new()));
//!
//! // Direct dispatch
//! let result = service.dispatch("student.add", json!({
//!     "name": "Ana", "lastname": "Gomez", "mail": "a@x.com"
//! }))?;
//!
//! // HTTP transport (requires "http" feature)
//! // microsvc::serve(Arc::new(service), "0.0.0.0:3000").await?;
//! ```
//!
//! ## Handler Convention
//!
//! ```ignore
//! // src/microsvc/handlers/delete.rs
//!
//! pub const COMMAND: &str = "student.delete";
//!
//! pub fn handle<S: RecordStore>(
//!     ctx: &Context<RecordFacade<S>>,
//! ) -> Result<Value, HandlerError> {
//!     let input = ctx.input::<DeleteRequest>()?;
//!     Ok(serde_json::to_value(ctx.facade().delete(input)?)?)
//! }
//! ```

mod context;
mod error;
pub mod handlers;
mod service;

pub use context::Context;
pub use error::HandlerError;
pub use service::Service;

// HTTP transport (requires "http" feature)
#[cfg(feature = "http")]
mod http;
#[cfg(feature = "http")]
pub use http::{router, serve};

// gRPC transport (requires "grpc" feature)
#[cfg(feature = "grpc")]
pub mod grpc;
#[cfg(feature = "grpc")]
pub use grpc::{grpc_server, serve_grpc};

/// Register handler modules with a service using the convention pattern.
///
/// Each handler module must export:
/// - `COMMAND: &str` — the command name
/// - `handle(ctx) -> Result<Value, HandlerError>` — the handler
///
/// # Example
/// ```ignore
/// let service = student_registry::register_handlers!(
///     microsvc::Service::new(facade),
///     handlers::count,
///     handlers::add,
/// );
/// ```
#[macro_export]
macro_rules! register_handlers {
    ($service:expr, $( $($seg:ident)::+ ),+ $(,)?) => {
        $service
        $(
            .command($($seg)::+::COMMAND, $($seg)::+::handle)
        )+
    };
}
