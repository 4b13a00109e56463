//! Conversion between typed models and JSON mappings.
//!
//! Models are plain serde types. Per-field wire names are expressed with
//! `#[serde(rename = "...")]`, omission with [`Field`](crate::Field) and
//! mixin composition with `#[serde(flatten)]`, so both directions share one
//! declaration.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Errors converting between models and their wire form.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The model did not serialize to a JSON object.
    #[error("expected a JSON object, got {0}")]
    NotAnObject(&'static str),
    /// serde failed in either direction.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A domain validation failure raised while constructing a model.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ModelError(pub String);

impl ModelError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self(message.into())
    }
}

/// Marker for models sent as request bodies.
pub trait RequestModel: Serialize {
    /// Encode into the mapping sent on the wire.
    fn to_wire(&self) -> Result<Map<String, Value>, CodecError> {
        to_wire(self)
    }
}

/// Marker for models decoded from response `data`.
pub trait ResponseModel: DeserializeOwned + Sized {
    fn from_wire(data: Value) -> Result<Self, CodecError> {
        from_wire(data)
    }
}

/// Encode a model into a JSON mapping.
pub fn to_wire<T: Serialize + ?Sized>(model: &T) -> Result<Map<String, Value>, CodecError> {
    match serde_json::to_value(model)? {
        Value::Object(map) => Ok(map),
        other => Err(CodecError::NotAnObject(json_type_name(&other))),
    }
}

/// Decode a model from a JSON value.
pub fn from_wire<T: DeserializeOwned>(data: Value) -> Result<T, CodecError> {
    Ok(serde_json::from_value(data)?)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Field, Lenient};
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    enum Kind {
        Full,
        Partial,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Located {
        location: Option<String>,
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Record {
        slug: String,
        #[serde(rename = "type")]
        kind: Lenient<Kind>,
        #[serde(flatten)]
        located: Located,
    }
    impl ResponseModel for Record {}

    #[derive(Default, Serialize)]
    struct Options {
        #[serde(default, skip_serializing_if = "Field::is_unset")]
        name: Field<String>,
        #[serde(default, rename = "options", skip_serializing_if = "Field::is_unset")]
        config: Field<Map<String, Value>>,
    }
    impl RequestModel for Options {}

    #[test]
    fn test_empty_request_encodes_to_empty_map() {
        assert!(Options::default().to_wire().unwrap().is_empty());
    }

    #[test]
    fn test_alias_and_null() {
        let options = Options {
            config: Field::Null,
            ..Default::default()
        };
        assert_eq!(Value::Object(options.to_wire().unwrap()), json!({"options": null}));
    }

    #[test]
    fn test_response_round_trip_with_flatten_and_alias() {
        let data = json!({"slug": "abc", "type": "partial", "location": null});
        let record = Record::from_wire(data.clone()).unwrap();
        assert_eq!(record.kind, Kind::Partial);
        assert_eq!(record.located.location, None);
        assert_eq!(Value::Object(to_wire(&record).unwrap()), data);
    }

    #[test]
    fn test_unknown_enum_round_trip() {
        let data = json!({"slug": "abc", "type": "incremental", "location": ".cloud"});
        let record = Record::from_wire(data.clone()).unwrap();
        assert_eq!(record.kind.unknown(), Some("incremental"));
        assert_eq!(Value::Object(to_wire(&record).unwrap()), data);
    }

    #[test]
    fn test_missing_required_field_fails() {
        let err = Record::from_wire(json!({"type": "full", "location": null})).unwrap_err();
        assert!(matches!(err, CodecError::Json(_)));
    }

    #[test]
    fn test_non_object_is_rejected() {
        let err = to_wire(&vec![1, 2]).unwrap_err();
        assert!(matches!(err, CodecError::NotAnObject("an array")));
    }
}
