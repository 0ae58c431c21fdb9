//! Handler: student.list

use serde_json::Value;

use crate::facade::RecordFacade;
use crate::microsvc::{Context, HandlerError};
use crate::store::RecordStore;

pub const COMMAND: &str = "student.list";

pub fn handle<S: RecordStore>(ctx: &Context<RecordFacade<S>>) -> Result<Value, HandlerError> {
    let response = ctx.facade().list_all()?;
    Ok(serde_json::to_value(response)?)
}
