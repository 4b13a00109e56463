//! Top-level information and shared enums.

use hasupervisor_core::Lenient;
use serde::{Deserialize, Serialize};

/// Host capabilities reported by the Supervisor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HostFeature {
    Disk,
    Haos,
    Hostname,
    Journal,
    Mount,
    Network,
    OsAgent,
    Reboot,
    Resolved,
    Services,
    Shutdown,
    Timedate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupervisorState {
    Initialize,
    Setup,
    Startup,
    Running,
    Freeze,
    Shutdown,
    Stopping,
    Close,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateChannel {
    Stable,
    Beta,
    Dev,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateType {
    Addon,
    Core,
    Os,
    Supervisor,
}

/// Response of `GET info`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RootInfo {
    pub supervisor: String,
    pub homeassistant: Option<String>,
    pub hassos: Option<String>,
    pub docker: String,
    pub hostname: Option<String>,
    pub operating_system: Option<String>,
    pub features: Vec<Lenient<HostFeature>>,
    pub machine: Option<String>,
    pub arch: String,
    pub state: SupervisorState,
    pub supported_arch: Vec<String>,
    pub supported: bool,
    pub channel: UpdateChannel,
    pub logging: LogLevel,
    pub timezone: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AvailableUpdate {
    pub update_type: UpdateType,
    pub panel_path: String,
    pub version_latest: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AvailableUpdates {
    pub available_updates: Vec<AvailableUpdate>,
}

response_models!(RootInfo, AvailableUpdates);
