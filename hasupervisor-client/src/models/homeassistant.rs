//! Home Assistant core (`core/`).

use std::net::Ipv4Addr;

use hasupervisor_core::Field;
use serde::{Deserialize, Serialize};

/// Response of `GET core/info`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HomeAssistantInfo {
    pub version: Option<String>,
    pub version_latest: Option<String>,
    pub update_available: bool,
    pub machine: String,
    pub ip_address: Ipv4Addr,
    pub arch: String,
    pub image: String,
    pub boot: bool,
    pub port: u16,
    pub ssl: bool,
    pub watchdog: bool,
    pub audio_input: Option<String>,
    pub audio_output: Option<String>,
    pub backups_exclude_database: bool,
}

/// Response of `GET core/stats`.
pub type HomeAssistantStats = super::ContainerStats;

/// Body of `POST core/options`.
///
/// `image`, `refresh_token`, `audio_input` and `audio_output` accept an
/// explicit [`Field::Null`] to reset them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeAssistantOptions {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub boot: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub image: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub port: Field<u16>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub ssl: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub watchdog: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub refresh_token: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub audio_input: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub audio_output: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub backups_exclude_database: Field<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeAssistantUpdateOptions {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub version: Field<String>,
    /// Take a backup of core before updating.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub backup: Field<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeAssistantRestartOptions {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub safe_mode: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub force: Field<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeAssistantRebuildOptions {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub safe_mode: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub force: Field<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HomeAssistantStopOptions {
    pub force: bool,
}

request_models!(HomeAssistantStopOptions);
options_models!(
    HomeAssistantOptions,
    HomeAssistantUpdateOptions,
    HomeAssistantRestartOptions,
    HomeAssistantRebuildOptions,
);
response_models!(HomeAssistantInfo);

#[cfg(test)]
mod tests {
    use super::*;
    use hasupervisor_core::{RequestModel, ResponseModel, to_wire};
    use serde_json::{Value, json};

    #[test]
    fn test_info_round_trip() {
        let data = json!({
            "version": "2024.9.0",
            "version_latest": "2024.9.0",
            "update_available": false,
            "machine": "odroid-n2",
            "ip_address": "172.30.32.1",
            "arch": "aarch64",
            "image": "ghcr.io/home-assistant/odroid-n2-homeassistant",
            "boot": true,
            "port": 8123,
            "ssl": false,
            "watchdog": true,
            "audio_input": null,
            "audio_output": null,
            "backups_exclude_database": false
        });
        let info = HomeAssistantInfo::from_wire(data.clone()).unwrap();
        assert_eq!(info.ip_address, Ipv4Addr::new(172, 30, 32, 1));
        assert_eq!(info.port, 8123);
        assert_eq!(Value::Object(to_wire(&info).unwrap()), data);
    }

    #[test]
    fn test_options_null_is_kept() {
        let options = HomeAssistantOptions {
            watchdog: false.into(),
            image: Field::Null,
            refresh_token: Field::Null,
            ..Default::default()
        };
        assert_eq!(
            Value::Object(options.to_wire().unwrap()),
            json!({"watchdog": false, "image": null, "refresh_token": null})
        );
        assert!(HomeAssistantOptions::default().to_wire().unwrap().is_empty());
    }
}
