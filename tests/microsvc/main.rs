//! microsvc integration tests.

mod dispatch;

#[cfg(feature = "http")]
mod http;
