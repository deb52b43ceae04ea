//! Opaque record model.
//!
//! # Responsibility
//! - Define the domain-agnostic record flowing through every list screen.
//! - Validate that records are JSON objects carrying a usable `id`.
//!
//! # Invariants
//! - A `Record` is always a JSON object.
//! - A `Record` always has an `id` that is either text or a whole number.
//! - Field values beyond `id` are opaque to the controller.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for one record.
///
/// Upstream services mix numeric and string ids across screens, so both
/// shapes are first-class here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Text(String),
    Number(i64),
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text(value) => write!(f, "{value}"),
            Self::Number(value) => write!(f, "{value}"),
        }
    }
}

/// Record construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    NotAnObject,
    MissingId,
    InvalidId(String),
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnObject => write!(f, "record must be a JSON object"),
            Self::MissingId => write!(f, "record has no `id` field"),
            Self::InvalidId(value) => {
                write!(f, "record `id` must be text or a whole number, got {value}")
            }
        }
    }
}

impl Error for RecordValidationError {}

/// One opaque domain entity (user, media asset, taxonomy, ...).
///
/// The controller never interprets fields beyond `id`; searchable field
/// names come from the owning screen's configuration. The id is parsed
/// once at construction, so a `Record` in hand always has a usable one.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: RecordId,
    fields: Map<String, Value>,
}

impl Record {
    /// Builds a record from an arbitrary JSON value.
    ///
    /// # Errors
    /// - Returns an error when `value` is not an object.
    /// - Returns an error when `id` is missing or not text/whole-number.
    pub fn from_value(value: Value) -> Result<Self, RecordValidationError> {
        let fields = match value {
            Value::Object(fields) => fields,
            _ => return Err(RecordValidationError::NotAnObject),
        };
        Self::from_fields(fields)
    }

    /// Builds a record, assigning `ordinal` as the id when none is present.
    ///
    /// Used when loading fallback datasets: a few of the bundled sample
    /// sets ship without ids, and the catalog normalizes them to ordinal
    /// ids instead of carrying id-less rows through the core.
    pub fn from_value_with_ordinal(
        value: Value,
        ordinal: i64,
    ) -> Result<Self, RecordValidationError> {
        let mut fields = match value {
            Value::Object(fields) => fields,
            _ => return Err(RecordValidationError::NotAnObject),
        };
        if !fields.contains_key("id") {
            fields.insert("id".to_string(), Value::from(ordinal));
        }
        Self::from_fields(fields)
    }

    fn from_fields(fields: Map<String, Value>) -> Result<Self, RecordValidationError> {
        let id = match fields.get("id") {
            None => return Err(RecordValidationError::MissingId),
            Some(Value::String(value)) => RecordId::Text(value.clone()),
            Some(Value::Number(number)) => match number.as_i64() {
                Some(value) => RecordId::Number(value),
                None => return Err(RecordValidationError::InvalidId(number.to_string())),
            },
            Some(other) => return Err(RecordValidationError::InvalidId(other.to_string())),
        };
        Ok(Self { id, fields })
    }

    /// Returns the record id.
    pub fn id(&self) -> RecordId {
        self.id.clone()
    }

    /// Returns one raw field value.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns one field as text, or `None` when absent or non-string.
    ///
    /// Non-string values never participate in text search.
    pub fn text_field(&self, name: &str) -> Option<&str> {
        match self.fields.get(name) {
            Some(Value::String(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Returns the underlying field map.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Map::deserialize(deserializer)?;
        Record::from_fields(fields).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::{Record, RecordId, RecordValidationError};
    use serde_json::json;

    #[test]
    fn accepts_text_and_numeric_ids() {
        let text = Record::from_value(json!({"id": "u-1", "name": "Alice"}))
            .expect("text id should validate");
        assert_eq!(text.id(), RecordId::Text("u-1".to_string()));

        let numeric =
            Record::from_value(json!({"id": 7, "name": "Bob"})).expect("numeric id should validate");
        assert_eq!(numeric.id(), RecordId::Number(7));
    }

    #[test]
    fn rejects_non_object_and_bad_ids() {
        assert_eq!(
            Record::from_value(json!(["not", "an", "object"])),
            Err(RecordValidationError::NotAnObject)
        );
        assert_eq!(
            Record::from_value(json!({"name": "no id"})),
            Err(RecordValidationError::MissingId)
        );
        assert!(matches!(
            Record::from_value(json!({"id": {"nested": true}})),
            Err(RecordValidationError::InvalidId(_))
        ));
        assert!(matches!(
            Record::from_value(json!({"id": 1.5})),
            Err(RecordValidationError::InvalidId(_))
        ));
    }

    #[test]
    fn ordinal_fallback_fills_missing_id_only() {
        let filled = Record::from_value_with_ordinal(json!({"name": "row"}), 4)
            .expect("missing id should be filled");
        assert_eq!(filled.id(), RecordId::Number(4));

        let kept = Record::from_value_with_ordinal(json!({"id": "kept", "name": "row"}), 4)
            .expect("existing id should be kept");
        assert_eq!(kept.id(), RecordId::Text("kept".to_string()));
    }

    #[test]
    fn deserialization_runs_id_validation() {
        let record: Record = serde_json::from_str(r#"{"id": 3, "name": "row"}"#)
            .expect("valid record should deserialize");
        assert_eq!(record.id(), RecordId::Number(3));

        let bad: Result<Record, _> = serde_json::from_str(r#"{"id": 1.5}"#);
        assert!(bad.is_err());
        let missing: Result<Record, _> = serde_json::from_str(r#"{"name": "no id"}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn text_field_ignores_non_string_values() {
        let record = Record::from_value(json!({"id": 1, "name": "Alice", "age": 30}))
            .expect("record should validate");
        assert_eq!(record.text_field("name"), Some("Alice"));
        assert_eq!(record.text_field("age"), None);
        assert_eq!(record.text_field("missing"), None);
    }
}
