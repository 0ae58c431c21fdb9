//! Handler: student.update

use serde_json::Value;

use crate::facade::{RecordFacade, UpdateRequest};
use crate::microsvc::{Context, HandlerError};
use crate::store::RecordStore;

pub const COMMAND: &str = "student.update";

pub fn handle<S: RecordStore>(ctx: &Context<RecordFacade<S>>) -> Result<Value, HandlerError> {
    let input = ctx.input::<UpdateRequest>()?;
    let response = ctx.facade().update(input)?;
    Ok(serde_json::to_value(response)?)
}
