//! Host system (`host/`).

use hasupervisor_core::Lenient;
use serde::{Deserialize, Serialize};

use super::Timestamp;
use super::root::HostFeature;

/// systemd unit state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceState {
    Active,
    Reloading,
    Inactive,
    Failed,
    Activating,
    Deactivating,
    Maintenance,
}

/// Response of `GET host/info`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HostInfo {
    pub agent_version: Option<String>,
    pub apparmor_version: Option<String>,
    pub chassis: Option<String>,
    pub virtualization: Option<String>,
    pub cpe: Option<String>,
    pub deployment: Option<String>,
    pub disk_free: f64,
    pub disk_total: f64,
    pub disk_used: f64,
    pub disk_life_time: f64,
    pub features: Vec<Lenient<HostFeature>>,
    pub hostname: Option<String>,
    pub llmnr_hostname: Option<String>,
    pub kernel: Option<String>,
    pub operating_system: Option<String>,
    pub timezone: Option<String>,
    pub dt_utc: Option<Timestamp>,
    pub dt_synchronized: Option<bool>,
    pub use_ntp: Option<bool>,
    pub startup_time: Option<f64>,
    pub boot_timestamp: Option<i64>,
    pub broadcast_llmnr: Option<bool>,
    pub broadcast_mdns: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShutdownOptions {
    pub force: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RebootOptions {
    pub force: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HostOptions {
    pub hostname: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub description: String,
    pub state: Lenient<ServiceState>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServiceList {
    pub services: Vec<Service>,
}

request_models!(ShutdownOptions, RebootOptions, HostOptions);
response_models!(HostInfo, ServiceList);
