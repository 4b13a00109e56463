//! Home Assistant OS (`os/`).

use std::collections::BTreeMap;
use std::path::PathBuf;

use hasupervisor_core::Field;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaucState {
    Good,
    Bad,
    Active,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BootSlotName {
    A,
    B,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BootSlot {
    pub state: String,
    pub status: Option<RaucState>,
    pub version: Option<String>,
}

/// Response of `GET os/info`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OSInfo {
    pub version: Option<String>,
    pub version_latest: Option<String>,
    pub update_available: bool,
    pub board: Option<String>,
    pub boot: Option<String>,
    pub data_disk: Option<String>,
    pub boot_slots: BTreeMap<String, BootSlot>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OSUpdate {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub version: Field<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MigrateDataOptions {
    pub device: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataDisk {
    pub name: String,
    pub vendor: String,
    pub model: String,
    pub serial: String,
    pub size: i64,
    pub id: String,
    pub dev_path: PathBuf,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataDiskList {
    pub disks: Vec<DataDisk>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SetBootSlotOptions {
    pub boot_slot: BootSlotName,
}

/// LED settings of a Home Assistant Green.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GreenInfo {
    pub activity_led: bool,
    pub power_led: bool,
    pub system_health_led: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GreenOptions {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub activity_led: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub power_led: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub system_health_led: Field<bool>,
}

/// LED settings of a Home Assistant Yellow.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct YellowInfo {
    pub disk_led: bool,
    pub heartbeat_led: bool,
    pub power_led: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct YellowOptions {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub disk_led: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub heartbeat_led: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub power_led: Field<bool>,
}

request_models!(OSUpdate, MigrateDataOptions, SetBootSlotOptions);
options_models!(GreenOptions, YellowOptions);
response_models!(OSInfo, DataDiskList, GreenInfo, YellowInfo);
