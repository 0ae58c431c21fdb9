//! Handler: student.add

use serde_json::Value;

use crate::facade::{AddRequest, RecordFacade};
use crate::microsvc::{Context, HandlerError};
use crate::store::RecordStore;

pub const COMMAND: &str = "student.add";

pub fn handle<S: RecordStore>(ctx: &Context<RecordFacade<S>>) -> Result<Value, HandlerError> {
    let input = ctx.input::<AddRequest>()?;
    let response = ctx.facade().add(input)?;
    Ok(serde_json::to_value(response)?)
}
