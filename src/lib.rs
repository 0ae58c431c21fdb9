//! In-memory student record service.
//!
//! A [`RecordStore`] owns the records and their invariants, a
//! [`RecordFacade`] turns store outcomes into response payloads, and
//! [`microsvc`] exposes the facade over command dispatch, gRPC and HTTP.

mod error;

pub mod config;
pub mod facade;
pub mod logging;
pub mod microsvc;
pub mod record;
pub mod store;

#[cfg(feature = "grpc")]
pub mod client;

pub use error::StoreError;
pub use facade::RecordFacade;
pub use record::{Record, RecordFields};
pub use store::{InMemoryRecordStore, RecordStore};

#[cfg(feature = "grpc")]
pub use client::{ClientError, StudentClient};
