//! Record — one student's stored profile.

use serde::{Deserialize, Serialize};

/// A stored student record.
///
/// `id` is assigned by the store on creation and never changes. Optional
/// contact fields are always present as (possibly empty) strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub lastname: String,
    pub mail: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
}

impl Record {
    pub(crate) fn from_fields(id: String, fields: RecordFields) -> Self {
        Self {
            id,
            name: fields.name,
            lastname: fields.lastname,
            mail: fields.mail,
            phone: fields.phone.unwrap_or_default(),
            street: fields.street.unwrap_or_default(),
            city: fields.city.unwrap_or_default(),
        }
    }

    /// Replace every mutable field, keeping the id.
    pub(crate) fn apply(&mut self, fields: RecordFields) {
        self.name = fields.name;
        self.lastname = fields.lastname;
        self.mail = fields.mail;
        self.phone = fields.phone.unwrap_or_default();
        self.street = fields.street.unwrap_or_default();
        self.city = fields.city.unwrap_or_default();
    }

    /// "Name Lastname", used in status messages.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.lastname)
    }
}

/// The caller-supplied part of a record, used by add and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFields {
    pub name: String,
    pub lastname: String,
    pub mail: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

impl RecordFields {
    pub fn new(
        name: impl Into<String>,
        lastname: impl Into<String>,
        mail: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            lastname: lastname.into(),
            mail: mail.into(),
            ..Self::default()
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }
}
