//! Handler: student.delete

use serde_json::Value;

use crate::facade::{DeleteRequest, RecordFacade};
use crate::microsvc::{Context, HandlerError};
use crate::store::RecordStore;

pub const COMMAND: &str = "student.delete";

pub fn handle<S: RecordStore>(ctx: &Context<RecordFacade<S>>) -> Result<Value, HandlerError> {
    let input = ctx.input::<DeleteRequest>()?;
    let response = ctx.facade().delete(input)?;
    Ok(serde_json::to_value(response)?)
}
