//! Request and response payloads for the facade operations.
//!
//! Business failures travel inside these payloads (`found` / `success` plus a
//! message); they are never reported as errors.

use serde::{Deserialize, Serialize};

use crate::record::{Record, RecordFields};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListResponse {
    pub records: Vec<Record>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindRequest {
    #[serde(default)]
    pub name: String,
}

impl FindRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindResponse {
    pub record: Option<Record>,
    pub found: bool,
    pub message: String,
}

impl FindResponse {
    pub(crate) fn not_found(message: String) -> Self {
        Self {
            record: None,
            found: false,
            message,
        }
    }
}

/// Payload for `add`. Required fields default to empty so that a missing
/// field is reported by the facade rather than by the decoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub mail: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

impl AddRequest {
    pub(crate) fn missing_fields(&self) -> Vec<&'static str> {
        blank(&[
            ("name", &self.name),
            ("lastname", &self.lastname),
            ("mail", &self.mail),
        ])
    }
}

impl From<RecordFields> for AddRequest {
    fn from(fields: RecordFields) -> Self {
        Self {
            name: fields.name,
            lastname: fields.lastname,
            mail: fields.mail,
            phone: fields.phone,
            street: fields.street,
            city: fields.city,
        }
    }
}

impl From<AddRequest> for RecordFields {
    fn from(request: AddRequest) -> Self {
        Self {
            name: request.name,
            lastname: request.lastname,
            mail: request.mail,
            phone: request.phone,
            street: request.street,
            city: request.city,
        }
    }
}

/// Payload for `update`: the target id plus the full replacement fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRequest {
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub fields: AddRequest,
}

impl UpdateRequest {
    pub fn new(id: impl Into<String>, fields: RecordFields) -> Self {
        Self {
            id: id.into(),
            fields: fields.into(),
        }
    }

    pub(crate) fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = blank(&[("id", &self.id)]);
        missing.extend(self.fields.missing_fields());
        missing
    }
}

/// Response shared by `add` and `update`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordResponse {
    pub record: Option<Record>,
    pub success: bool,
    pub message: String,
}

impl RecordResponse {
    pub(crate) fn rejected(message: String) -> Self {
        Self {
            record: None,
            success: false,
            message,
        }
    }
}

pub type AddResponse = RecordResponse;
pub type UpdateResponse = RecordResponse;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteRequest {
    #[serde(default)]
    pub id: String,
}

impl DeleteRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

pub(crate) fn blank(fields: &[(&'static str, &String)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect()
}

pub(crate) fn missing_message(missing: &[&str]) -> String {
    format!("missing required field(s): {}", missing.join(", "))
}
