//! Facade integration tests.
//!
//! Exercises the request/response contract over a real in-memory store:
//! flags, messages, and what the store looks like afterwards.

mod internal;
mod scenarios;
mod support;
