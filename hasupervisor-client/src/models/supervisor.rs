//! The Supervisor itself (`supervisor/`).

use hasupervisor_core::Field;
use serde::{Deserialize, Serialize};

use super::root::{LogLevel, UpdateChannel};

/// Response of `GET supervisor/info`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SupervisorInfo {
    pub version: String,
    pub version_latest: String,
    pub update_available: bool,
    pub channel: UpdateChannel,
    pub arch: String,
    pub supported: bool,
    pub healthy: bool,
    pub ip_address: String,
    pub timezone: Option<String>,
    pub logging: LogLevel,
    pub debug: bool,
    pub debug_block: bool,
    pub diagnostics: Option<bool>,
    pub auto_update: bool,
}

/// Response of `GET supervisor/stats`.
pub type SupervisorStats = super::ContainerStats;

/// Body of `POST supervisor/update`. The version is honored on development systems only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SupervisorUpdateOptions {
    pub version: String,
}

/// Body of `POST supervisor/options`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SupervisorOptions {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub channel: Field<UpdateChannel>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub timezone: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub logging: Field<LogLevel>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub debug: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub debug_block: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub diagnostics: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub content_trust: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub force_security: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub auto_update: Field<bool>,
}

request_models!(SupervisorUpdateOptions);
options_models!(SupervisorOptions);
response_models!(SupervisorInfo);

#[cfg(test)]
mod tests {
    use super::*;
    use hasupervisor_core::{RequestModel, ResponseModel, to_wire};
    use serde_json::{Value, json};

    #[test]
    fn test_info_round_trip() {
        let data = json!({
            "version": "2024.10.0",
            "version_latest": "2024.10.0",
            "update_available": false,
            "channel": "stable",
            "arch": "aarch64",
            "supported": true,
            "healthy": true,
            "ip_address": "172.30.32.2",
            "timezone": "America/New_York",
            "logging": "info",
            "debug": false,
            "debug_block": false,
            "diagnostics": null,
            "auto_update": true
        });
        let info = SupervisorInfo::from_wire(data.clone()).unwrap();
        assert_eq!(info.channel, UpdateChannel::Stable);
        assert_eq!(info.logging, LogLevel::Info);
        assert_eq!(Value::Object(to_wire(&info).unwrap()), data);
    }

    #[test]
    fn test_options_encoding() {
        let options = SupervisorOptions {
            channel: UpdateChannel::Beta.into(),
            diagnostics: false.into(),
            ..Default::default()
        };
        assert_eq!(
            Value::Object(options.to_wire().unwrap()),
            json!({"channel": "beta", "diagnostics": false})
        );
    }
}
