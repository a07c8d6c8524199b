use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

pub const ID: &str = "ID";
pub const NAME: &str = "Name";
pub const EMAIL: &str = "Email";
pub const REGISTRATION_DATE: &str = "RegistrationDate";

/// Every key an uploaded document must carry, in the order they are reported when missing
pub const REQUIRED_FIELDS: [&str; 4] = [ID, NAME, EMAIL, REGISTRATION_DATE];

/// A single registration as persisted in the table, keyed by `ID`
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Registration {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    pub email: String,
    /// Kept as the uploaded text, no date parsing is applied
    pub registration_date: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("expected a json object, found {0}")]
    NotAnObject(&'static str),
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("field {field} must be a string, found {found}")]
    InvalidField {
        field: &'static str,
        found: &'static str,
    },
}

impl TryFrom<Value> for Registration {
    type Error = RegistrationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let mut object = match value {
            Value::Object(object) => object,
            other => return Err(RegistrationError::NotAnObject(json_kind(&other))),
        };

        let missing: Vec<&'static str> = REQUIRED_FIELDS
            .into_iter()
            .filter(|field| !object.contains_key(*field))
            .collect();
        if !missing.is_empty() {
            return Err(RegistrationError::MissingFields(missing));
        }

        // exporters regularly emit numeric ids
        let id = match take(&mut object, ID)? {
            Value::Number(n) => n.to_string(),
            other => string_value(ID, other)?,
        };

        Ok(Registration {
            id,
            name: string_value(NAME, take(&mut object, NAME)?)?,
            email: string_value(EMAIL, take(&mut object, EMAIL)?)?,
            registration_date: string_value(
                REGISTRATION_DATE,
                take(&mut object, REGISTRATION_DATE)?,
            )?,
        })
    }
}

fn take(object: &mut Map<String, Value>, field: &'static str) -> Result<Value, RegistrationError> {
    object
        .remove(field)
        .ok_or_else(|| RegistrationError::MissingFields(vec![field]))
}

fn string_value(field: &'static str, value: Value) -> Result<String, RegistrationError> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(RegistrationError::InvalidField {
            field,
            found: json_kind(&other),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
