//! Forward-compatible enum fields.
//!
//! The Supervisor adds new job conditions, issue types, host features and so
//! on between releases. A response field typed as [`Lenient<E>`] decodes a
//! recognized value into `Known(E)` and keeps anything else as
//! `Unknown(String)` instead of failing the whole response.

use std::fmt;

use serde::de::value::{Error as ValueError, StrDeserializer};
use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An enum value that may be outside the set this client knows about.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Lenient<E> {
    Known(E),
    Unknown(String),
}

impl<E> Lenient<E> {
    /// Returns the known value, if the wire string was recognized.
    pub fn known(&self) -> Option<&E> {
        match self {
            Lenient::Known(e) => Some(e),
            Lenient::Unknown(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Lenient::Known(_))
    }

    /// Returns the raw string for values this client does not recognize.
    pub fn unknown(&self) -> Option<&str> {
        match self {
            Lenient::Known(_) => None,
            Lenient::Unknown(raw) => Some(raw),
        }
    }
}

impl<E: DeserializeOwned> Lenient<E> {
    /// Classify a raw wire string.
    pub fn parse(raw: &str) -> Self {
        let de: StrDeserializer<'_, ValueError> = raw.into_deserializer();
        match E::deserialize(de) {
            Ok(known) => Lenient::Known(known),
            Err(_) => Lenient::Unknown(raw.to_owned()),
        }
    }
}

impl<E> From<E> for Lenient<E> {
    fn from(value: E) -> Self {
        Lenient::Known(value)
    }
}

impl<E: PartialEq> PartialEq<E> for Lenient<E> {
    fn eq(&self, other: &E) -> bool {
        matches!(self, Lenient::Known(e) if e == other)
    }
}

impl<E: Serialize> fmt::Display for Lenient<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lenient::Known(e) => match serde_json::to_value(e) {
                Ok(serde_json::Value::String(s)) => f.write_str(&s),
                _ => f.write_str("<unrepresentable>"),
            },
            Lenient::Unknown(raw) => f.write_str(raw),
        }
    }
}

impl<E: Serialize> Serialize for Lenient<E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Lenient::Known(e) => e.serialize(serializer),
            Lenient::Unknown(raw) => serializer.serialize_str(raw),
        }
    }
}

impl<'de, E: DeserializeOwned> Deserialize<'de> for Lenient<E> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Lenient::parse(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    enum Condition {
        Healthy,
        FreeSpace,
    }

    #[test]
    fn test_known_value() {
        let value: Lenient<Condition> = serde_json::from_value(json!("free_space")).unwrap();
        assert_eq!(value, Condition::FreeSpace);
        assert!(value.is_known());
        assert_eq!(value.to_string(), "free_space");
    }

    #[test]
    fn test_unknown_value_is_kept() {
        let value: Lenient<Condition> =
            serde_json::from_value(json!("brand_new_condition")).unwrap();
        assert_eq!(value, Lenient::Unknown("brand_new_condition".into()));
        assert_eq!(value.unknown(), Some("brand_new_condition"));
        assert_eq!(serde_json::to_value(&value).unwrap(), json!("brand_new_condition"));
    }

    #[test]
    fn test_list_with_mixed_values() {
        let values: Vec<Lenient<Condition>> =
            serde_json::from_value(json!(["healthy", "not_real"])).unwrap();
        assert_eq!(values[0], Condition::Healthy);
        assert_eq!(values[1].unknown(), Some("not_real"));
        assert_eq!(
            serde_json::to_value(&values).unwrap(),
            json!(["healthy", "not_real"])
        );
    }

    #[test]
    fn test_non_string_is_rejected() {
        assert!(serde_json::from_value::<Lenient<Condition>>(json!(5)).is_err());
    }
}
