//! Request and response models, one module per Supervisor resource group.
//!
//! Every model derives `Deserialize` + `Serialize` so it round-trips through
//! [`to_wire`](hasupervisor_core::to_wire) and
//! [`from_wire`](hasupervisor_core::from_wire). Optional request fields use
//! [`Field`](hasupervisor_core::Field) so "not supplied" and "explicit null"
//! stay distinct.

use std::fmt;
use std::ops::Deref;

use chrono::{DateTime, FixedOffset, SecondsFormat, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

macro_rules! request_models {
    ($($ty:ty),* $(,)?) => {
        $(impl hasupervisor_core::RequestModel for $ty {})*
    };
}

/// Request models where every field is optional and at least one must be set.
///
/// Sending one with nothing set fails locally with
/// [`SupervisorError::Encode`](crate::SupervisorError::Encode).
pub trait OptionsModel: hasupervisor_core::RequestModel {}

macro_rules! options_models {
    ($($ty:ty),* $(,)?) => {
        $(
            impl hasupervisor_core::RequestModel for $ty {}
            impl $crate::models::OptionsModel for $ty {}
        )*
    };
}

macro_rules! response_models {
    ($($ty:ty),* $(,)?) => {
        $(impl hasupervisor_core::ResponseModel for $ty {})*
    };
}

pub mod addons;
pub mod backups;
pub mod discovery;
pub mod homeassistant;
pub mod host;
pub mod jobs;
pub mod mounts;
pub mod network;
pub mod os;
pub mod resolution;
pub mod root;
pub mod store;
pub mod supervisor;

/// An ISO-8601 timestamp with an explicit offset.
///
/// Encodes the offset numerically (`+00:00`, never `Z`) and the fraction in
/// microseconds when there is one, the way the Supervisor writes dates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp(pub DateTime<FixedOffset>);

impl Timestamp {
    pub fn into_inner(self) -> DateTime<FixedOffset> {
        self.0
    }

    /// Wire form of this timestamp.
    pub fn to_wire_string(&self) -> String {
        let format = if self.0.nanosecond() == 0 {
            SecondsFormat::Secs
        } else {
            SecondsFormat::Micros
        };
        self.0.to_rfc3339_opts(format, false)
    }
}

impl Deref for Timestamp {
    type Target = DateTime<FixedOffset>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Timestamp(dt)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_wire_string())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire_string())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        DateTime::<FixedOffset>::deserialize(deserializer).map(Timestamp)
    }
}

/// Resource usage of a container (core, supervisor, add-ons).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContainerStats {
    pub cpu_percent: f64,
    pub memory_usage: i64,
    pub memory_limit: i64,
    pub memory_percent: f64,
    pub network_rx: i64,
    pub network_tx: i64,
    pub blk_read: i64,
    pub blk_write: i64,
}

response_models!(ContainerStats);

/// Where a backup should be stored.
///
/// Request bodies carry it in a [`Field`](hasupervisor_core::Field), where
/// `Null` means local storage. A `None` entry inside
/// [`LocationSelector::Set`] means local storage too.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationSelector {
    /// A named mount.
    Named(String),
    /// Several locations at once.
    Set(Vec<Option<String>>),
}

/// Query-string name of local storage.
pub const LOCAL_LOCATION: &str = ".local";

impl LocationSelector {
    /// Locations as query parameter values, with local storage as `.local`.
    pub fn query_values(&self) -> Vec<String> {
        let local = || LOCAL_LOCATION.to_owned();
        match self {
            LocationSelector::Named(name) => vec![name.clone()],
            LocationSelector::Set(locations) => locations
                .iter()
                .map(|l| l.clone().unwrap_or_else(local))
                .collect(),
        }
    }
}

impl From<&str> for LocationSelector {
    fn from(name: &str) -> Self {
        LocationSelector::Named(name.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_location_selector_encoding() {
        assert_eq!(serde_json::to_value(LocationSelector::from("nas")).unwrap(), json!("nas"));
        let set = LocationSelector::Set(vec![None, Some("nas".into())]);
        assert_eq!(serde_json::to_value(&set).unwrap(), json!([null, "nas"]));

        let named: LocationSelector = serde_json::from_value(json!("nas")).unwrap();
        assert_eq!(named, LocationSelector::from("nas"));
        let decoded: LocationSelector = serde_json::from_value(json!([null, "nas"])).unwrap();
        assert_eq!(decoded, set);
        assert!(serde_json::from_value::<LocationSelector>(json!(3)).is_err());
    }

    #[test]
    fn test_location_query_values() {
        assert_eq!(LocationSelector::from("nas").query_values(), vec!["nas"]);
        let set = LocationSelector::Set(vec![None, Some("nas".into())]);
        assert_eq!(set.query_values(), vec![".local", "nas"]);
    }

    #[test]
    fn test_timestamp_keeps_numeric_utc_offset() {
        let data = json!("2024-05-31T16:00:00+00:00");
        let ts: Timestamp = serde_json::from_value(data.clone()).unwrap();
        assert_eq!(serde_json::to_value(ts).unwrap(), data);
    }

    #[test]
    fn test_timestamp_encoding() {
        let ts: Timestamp = serde_json::from_value(json!("2024-05-31T18:00:00.5+02:00")).unwrap();
        assert_eq!(ts.to_wire_string(), "2024-05-31T18:00:00.500000+02:00");
        assert_eq!(ts.format("%H:%M").to_string(), "18:00");

        let ts: Timestamp = serde_json::from_value(json!("2024-05-31T16:00:00Z")).unwrap();
        assert_eq!(ts.to_string(), "2024-05-31T16:00:00+00:00");
    }

    #[test]
    fn test_container_stats_round_trip() {
        let data = json!({
            "cpu_percent": 0.04,
            "memory_usage": 243941376,
            "memory_limit": 3837841408i64,
            "memory_percent": 6.36,
            "network_rx": 0,
            "network_tx": 0,
            "blk_read": 0,
            "blk_write": 0
        });
        let stats: ContainerStats = serde_json::from_value(data.clone()).unwrap();
        assert_eq!(stats.memory_percent, 6.36);
        assert_eq!(serde_json::to_value(&stats).unwrap(), data);
    }
}
