//! Handler: student.count

use serde_json::Value;

use crate::facade::RecordFacade;
use crate::microsvc::{Context, HandlerError};
use crate::store::RecordStore;

pub const COMMAND: &str = "student.count";

pub fn handle<S: RecordStore>(ctx: &Context<RecordFacade<S>>) -> Result<Value, HandlerError> {
    let response = ctx.facade().count()?;
    Ok(serde_json::to_value(response)?)
}
