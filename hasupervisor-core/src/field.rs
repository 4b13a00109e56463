//! Three-state request fields.
//!
//! Supervisor options endpoints distinguish between a field that was not
//! supplied ("leave unchanged") and a field explicitly set to `null`
//! ("reset to default"). [`Field`] carries that distinction through serde:
//!
//! ```
//! use hasupervisor_core::Field;
//! use serde::Serialize;
//!
//! #[derive(Default, Serialize)]
//! struct Options {
//!     #[serde(default, skip_serializing_if = "Field::is_unset")]
//!     image: Field<String>,
//!     #[serde(default, skip_serializing_if = "Field::is_unset")]
//!     watchdog: Field<bool>,
//! }
//!
//! let options = Options { image: Field::Null, ..Default::default() };
//! assert_eq!(serde_json::to_string(&options).unwrap(), r#"{"image":null}"#);
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A request field that is either omitted, explicitly null, or set.
///
/// Use with `#[serde(default, skip_serializing_if = "Field::is_unset")]` so
/// that [`Field::Unset`] never reaches the wire.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Field<T> {
    /// Not supplied by the caller. Never encoded.
    Unset,
    /// Explicit JSON `null`.
    Null,
    /// A concrete value.
    Value(T),
}

// Manual impl: no `T: Default` bound.
impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Unset
    }
}

impl<T> Field<T> {
    /// Returns true if the field was left unset.
    pub fn is_unset(&self) -> bool {
        matches!(self, Field::Unset)
    }

    /// Returns true if the field is an explicit null.
    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    /// Returns true if the field holds a value.
    pub fn is_value(&self) -> bool {
        matches!(self, Field::Value(_))
    }

    /// Build a field from an option, mapping `None` to an explicit null.
    pub fn nullable(value: Option<T>) -> Self {
        match value {
            Some(v) => Field::Value(v),
            None => Field::Null,
        }
    }

    /// Borrow the contained value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Unset => Field::Unset,
            Field::Null => Field::Null,
            Field::Value(v) => Field::Value(v),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Field<U> {
        match self {
            Field::Unset => Field::Unset,
            Field::Null => Field::Null,
            Field::Value(v) => Field::Value(f(v)),
        }
    }

    /// Collapse into an option. Both unset and null become `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Value(value)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Only reachable when a container forgot `skip_serializing_if`.
            Field::Unset | Field::Null => serializer.serialize_none(),
            Field::Value(v) => serializer.serialize_some(v),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // A missing key is handled by `#[serde(default)]` and yields `Unset`.
        Ok(Field::nullable(Option::<T>::deserialize(deserializer)?))
    }
}
