//! Service discovery (`discovery/`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Body of `POST discovery`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryConfig {
    pub service: String,
    pub config: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Discovery {
    pub addon: String,
    pub service: String,
    #[serde(with = "uuid::serde::simple")]
    pub uuid: Uuid,
    pub config: Map<String, Value>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryList {
    pub discovery: Vec<Discovery>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetDiscovery {
    #[serde(with = "uuid::serde::simple")]
    pub uuid: Uuid,
}

request_models!(DiscoveryConfig);
response_models!(Discovery, DiscoveryList, SetDiscovery);
