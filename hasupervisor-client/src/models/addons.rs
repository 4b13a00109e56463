//! Installed add-ons (`addons/`).
//!
//! Add-on shapes are shared with the store: [`AddonBase`] is the common
//! summary, [`AddonInfoFields`] the detail block both installed and store
//! views carry.

use std::collections::BTreeMap;
use std::net::Ipv4Addr;

use hasupervisor_core::{Field, Lenient};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddonStage {
    Stable,
    Experimental,
    Deprecated,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddonBoot {
    Auto,
    Manual,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddonBootConfig {
    Auto,
    Manual,
    ManualOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddonStartup {
    Initialize,
    System,
    Services,
    Application,
    Once,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddonState {
    Startup,
    Started,
    Stopped,
    Unknown,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppArmor {
    Default,
    Disable,
    Profile,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CpuArch {
    Armhf,
    Armv7,
    Aarch64,
    I386,
    Amd64,
}

/// Linux capabilities an add-on may request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Capability {
    Bpf,
    CheckpointRestore,
    DacReadSearch,
    IpcLock,
    NetAdmin,
    NetRaw,
    Perfmon,
    SysAdmin,
    SysModule,
    SysNice,
    SysPtrace,
    SysRawio,
    SysResource,
    SysTime,
}

/// Supervisor API role granted to an add-on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupervisorRole {
    Default,
    Homeassistant,
    Backup,
    Manager,
    Admin,
}

/// Summary fields of any add-on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddonBase {
    pub detached: bool,
    pub advanced: bool,
    pub available: bool,
    pub build: bool,
    pub description: String,
    pub homeassistant: Option<String>,
    pub icon: bool,
    pub logo: bool,
    pub name: String,
    pub repository: String,
    pub slug: String,
    pub stage: AddonStage,
    pub update_available: bool,
    pub url: Option<String>,
    pub version_latest: String,
    pub version: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InstalledAddon {
    #[serde(flatten)]
    pub base: AddonBase,
    pub state: AddonState,
}

/// Detail fields shared by installed and store add-on info.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddonInfoFields {
    pub apparmor: AppArmor,
    pub arch: Vec<Lenient<CpuArch>>,
    pub audio: bool,
    pub auth_api: bool,
    pub changelog: bool,
    pub docker_api: bool,
    pub documentation: bool,
    pub full_access: bool,
    pub homeassistant_api: bool,
    pub host_network: bool,
    pub host_pid: bool,
    pub ingress: bool,
    pub long_description: Option<String>,
    pub machine: Vec<String>,
    pub privileged: Vec<Lenient<Capability>>,
    pub rating: i64,
    pub signed: bool,
    pub stdin: bool,
    #[serde(rename = "hassio_api")]
    pub supervisor_api: bool,
    #[serde(rename = "hassio_role")]
    pub supervisor_role: SupervisorRole,
    pub translations: Map<String, Value>,
}

/// Response of `GET addons/{addon}/info`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InstalledAddonComplete {
    #[serde(flatten)]
    pub addon: InstalledAddon,
    #[serde(flatten)]
    pub info: AddonInfoFields,
    pub hostname: String,
    pub dns: Vec<String>,
    pub protected: bool,
    pub boot: AddonBoot,
    pub boot_config: AddonBootConfig,
    pub options: Map<String, Value>,
    pub schema: Option<Vec<Value>>,
    pub network: Option<BTreeMap<String, Option<u16>>>,
    pub network_description: Option<BTreeMap<String, String>>,
    pub host_ipc: bool,
    pub host_uts: bool,
    pub host_dbus: bool,
    pub kernel_modules: bool,
    pub devicetree: bool,
    pub udev: bool,
    pub gpio: bool,
    pub usb: bool,
    pub uart: bool,
    pub devices: Vec<String>,
    pub video: bool,
    pub audio_input: Option<String>,
    pub audio_output: Option<String>,
    pub startup: AddonStartup,
    pub services: Vec<String>,
    pub discovery: Vec<String>,
    pub ingress_entry: Option<String>,
    pub ingress_url: Option<String>,
    pub ingress_port: Option<u16>,
    pub ingress_panel: Option<bool>,
    pub watchdog: Option<bool>,
    pub auto_update: bool,
    pub ip_address: Ipv4Addr,
    pub system_managed: bool,
    pub system_managed_config_entry: Option<String>,
}

/// Response of `GET addons`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddonsList {
    pub addons: Vec<InstalledAddon>,
}

/// Body of `POST addons/{addon}/options`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AddonsOptions {
    /// Add-on configuration; `Null` resets it to defaults.
    #[serde(rename = "options", default, skip_serializing_if = "Field::is_unset")]
    pub config: Field<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub boot: Field<AddonBoot>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub auto_update: Field<bool>,
    /// Host port per container port; `None` disables the mapping.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub network: Field<BTreeMap<String, Option<u16>>>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub audio_input: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub audio_output: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ingress_panel: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub watchdog: Field<bool>,
}

/// Response of `POST addons/{addon}/options/validate`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddonsConfigValidate {
    pub message: String,
    pub valid: bool,
    pub pwned: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AddonsSecurityOptions {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub protected: Field<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AddonsUninstall {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub remove_config: Field<bool>,
}

/// Response of `GET addons/{addon}/stats`.
pub type AddonsStats = super::ContainerStats;

request_models!(AddonsOptions, AddonsSecurityOptions, AddonsUninstall);
response_models!(AddonsList, InstalledAddonComplete, AddonsConfigValidate);

#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::{Value, json};

    pub(crate) fn addon_base(slug: &str, name: &str) -> Value {
        json!({
            "detached": false,
            "advanced": false,
            "available": true,
            "build": false,
            "description": "Allow logging in remotely to Home Assistant using SSH",
            "homeassistant": null,
            "icon": true,
            "logo": true,
            "name": name,
            "repository": "core",
            "slug": slug,
            "stage": "stable",
            "update_available": false,
            "url": "https://github.com/home-assistant/addons/tree/master/ssh",
            "version_latest": "9.14.0",
            "version": "9.14.0"
        })
    }

    pub(crate) fn info_fields() -> Value {
        json!({
            "apparmor": "default",
            "arch": ["armhf", "armv7", "aarch64", "amd64", "i386"],
            "audio": false,
            "auth_api": false,
            "changelog": true,
            "docker_api": false,
            "documentation": true,
            "full_access": false,
            "homeassistant_api": false,
            "host_network": false,
            "host_pid": false,
            "ingress": true,
            "long_description": null,
            "machine": [],
            "privileged": ["NET_RAW", "not_real"],
            "rating": 8,
            "signed": true,
            "stdin": false,
            "hassio_api": true,
            "hassio_role": "manager",
            "translations": {}
        })
    }

    pub(crate) fn merge(parts: &[Value]) -> Value {
        let mut merged = serde_json::Map::new();
        for part in parts {
            if let Value::Object(map) = part {
                merged.extend(map.clone());
            }
        }
        Value::Object(merged)
    }

    pub(crate) fn installed_addon_info() -> Value {
        merge(&[
            addon_base("core_ssh", "Terminal & SSH"),
            info_fields(),
            json!({
                "state": "started",
                "hostname": "core-ssh",
                "dns": ["core-ssh.local.hass.io"],
                "protected": true,
                "boot": "auto",
                "boot_config": "auto",
                "options": {"authorized_keys": [], "password": ""},
                "schema": [{"name": "password", "optional": true, "type": "password"}],
                "network": {"22/tcp": null},
                "network_description": {"22/tcp": "SSH Port"},
                "host_ipc": false,
                "host_uts": false,
                "host_dbus": false,
                "kernel_modules": false,
                "devicetree": false,
                "udev": false,
                "gpio": false,
                "usb": false,
                "uart": false,
                "devices": [],
                "video": false,
                "audio_input": null,
                "audio_output": null,
                "startup": "services",
                "services": [],
                "discovery": [],
                "ingress_entry": "/api/hassio_ingress/abc",
                "ingress_url": "/api/hassio_ingress/abc/",
                "ingress_port": 8099,
                "ingress_panel": true,
                "watchdog": false,
                "auto_update": false,
                "ip_address": "172.30.33.0",
                "system_managed": false,
                "system_managed_config_entry": null
            }),
        ])
    }
}
