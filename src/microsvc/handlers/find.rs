//! Handler: student.find

use serde_json::Value;

use crate::facade::{FindRequest, RecordFacade};
use crate::microsvc::{Context, HandlerError};
use crate::store::RecordStore;

pub const COMMAND: &str = "student.find";

pub fn handle<S: RecordStore>(ctx: &Context<RecordFacade<S>>) -> Result<Value, HandlerError> {
    let input = ctx.input::<FindRequest>()?;
    let response = ctx.facade().find_by_name(input)?;
    Ok(serde_json::to_value(response)?)
}
