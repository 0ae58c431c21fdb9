//! Command handlers for the student record service.
//!
//! Each handler file follows the microsvc convention:
//! - `COMMAND` — the command name this handler responds to
//! - `handle` — decodes the input, delegates to the facade and encodes its response
//!
//! Request types default absent keys to empty, so a missing field reaches the
//! facade and comes back as a `success: false` / `found: false` payload
//! rather than a dispatch error.

pub mod add;
pub mod count;
pub mod delete;
pub mod find;
pub mod list;
pub mod update;

use super::Service;
use crate::facade::RecordFacade;
use crate::store::RecordStore;

/// Build a service with all six student commands registered.
pub fn register<S: RecordStore + 'static>(
    facade: RecordFacade<S>,
) -> Service<RecordFacade<S>> {
    crate::register_handlers!(
        Service::new(facade),
        count,
        list,
        find,
        add,
        update,
        delete,
    )
}
