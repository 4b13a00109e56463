//! Resolution center (`resolution/`).
//!
//! Every type code here is [`Lenient`]: the Supervisor adds new issues,
//! checks and reasons between releases.

use hasupervisor_core::{Field, Lenient};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionType {
    AdoptDataDisk,
    ClearFullBackup,
    CreateFullBackup,
    ExecuteIntegrity,
    ExecuteReboot,
    ExecuteRebuild,
    ExecuteReload,
    ExecuteRemove,
    ExecuteRepair,
    ExecuteReset,
    ExecuteStop,
    ExecuteUpdate,
    RegistryLogin,
    RenameDataDisk,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    CorruptDocker,
    CorruptRepository,
    CorruptFilesystem,
    DetachedAddonMissing,
    DetachedAddonRemoved,
    DisabledDataDisk,
    DnsLoop,
    DnsServerFailed,
    DnsServerIpv6Error,
    DockerConfig,
    DockerRatelimit,
    FatalError,
    FreeSpace,
    Ipv4ConnectionProblem,
    MissingImage,
    MountFailed,
    MultipleDataDisks,
    NoCurrentBackup,
    Pwned,
    RebootRequired,
    Security,
    Trust,
    UpdateFailed,
    UpdateRollback,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsupportedReason {
    Apparmor,
    CgroupVersion,
    ConnectivityCheck,
    ContentTrust,
    Dbus,
    DnsServer,
    DockerConfiguration,
    DockerVersion,
    JobConditions,
    Lxc,
    NetworkManager,
    Os,
    OsAgent,
    Privileged,
    RestartPolicy,
    Software,
    SourceMods,
    SupervisorVersion,
    Systemd,
    SystemdJournal,
    SystemdResolved,
    VirtualizationImage,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnhealthyReason {
    Docker,
    OserrorBadMessage,
    Privileged,
    Supervisor,
    Setup,
    Untrusted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckType {
    AddonPwned,
    Backups,
    CoreSecurity,
    DetachedAddonMissing,
    DetachedAddonRemoved,
    DisabledDataDisk,
    DnsServerIpv6,
    DnsServer,
    DockerConfig,
    FreeSpace,
    MultipleDataDisks,
    NetworkInterfaceIpv4,
    SupervisorTrust,
}

/// What an issue or suggestion applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextType {
    Addon,
    Core,
    DnsServer,
    Mount,
    Os,
    Plugin,
    Supervisor,
    Store,
    System,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub suggestion_type: Lenient<SuggestionType>,
    pub context: ContextType,
    pub reference: Option<String>,
    #[serde(with = "uuid::serde::simple")]
    pub uuid: Uuid,
    pub auto: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub issue_type: Lenient<IssueType>,
    pub context: ContextType,
    pub reference: Option<String>,
    #[serde(with = "uuid::serde::simple")]
    pub uuid: Uuid,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Check {
    pub enabled: bool,
    pub slug: Lenient<CheckType>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SuggestionsList {
    pub suggestions: Vec<Suggestion>,
}

/// Response of `GET resolution/info`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolutionInfo {
    #[serde(flatten)]
    pub suggestions: SuggestionsList,
    pub unsupported: Vec<Lenient<UnsupportedReason>>,
    pub unhealthy: Vec<Lenient<UnhealthyReason>>,
    pub issues: Vec<Issue>,
    pub checks: Vec<Check>,
}

/// Body of `POST resolution/check/{check}/options`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckOptions {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub enabled: Field<bool>,
}

options_models!(CheckOptions);
response_models!(SuggestionsList, ResolutionInfo);

#[cfg(test)]
mod tests {
    use super::*;
    use hasupervisor_core::{ResponseModel, to_wire};
    use serde_json::{Value, json};

    #[test]
    fn test_resolution_info_round_trip() {
        let data = json!({
            "unsupported": ["os", "weird_setup"],
            "unhealthy": ["docker"],
            "suggestions": [
                {
                    "type": "execute_repair",
                    "context": "store",
                    "reference": "local",
                    "uuid": "f2e8e0eec2914ca6b18ac48eb2d83a05",
                    "auto": false
                }
            ],
            "issues": [
                {
                    "type": "no_current_backup",
                    "context": "system",
                    "reference": null,
                    "uuid": "7f0eac2b61c9456dab6970507a276c74"
                },
                {
                    "type": "brand_new_issue",
                    "context": "core",
                    "reference": null,
                    "uuid": "0b5d1ac0e1c54e31b0a7c0dfa0a4f6a3"
                }
            ],
            "checks": [
                {"enabled": true, "slug": "free_space"},
                {"enabled": false, "slug": "future_check"}
            ]
        });
        let info = ResolutionInfo::from_wire(data.clone()).unwrap();
        assert_eq!(info.unsupported[0], UnsupportedReason::Os);
        assert_eq!(info.unsupported[1].unknown(), Some("weird_setup"));
        assert_eq!(info.suggestions.suggestions[0].suggestion_type, SuggestionType::ExecuteRepair);
        assert_eq!(info.issues[1].issue_type.unknown(), Some("brand_new_issue"));
        assert_eq!(info.checks[0].slug, CheckType::FreeSpace);
        assert_eq!(info.checks[1].slug.unknown(), Some("future_check"));
        assert_eq!(Value::Object(to_wire(&info).unwrap()), data);
    }

    #[test]
    fn test_check_type_display() {
        assert_eq!(Lenient::from(CheckType::DnsServerIpv6).to_string(), "dns_server_ipv6");
        assert_eq!(Lenient::<CheckType>::parse("new_check").to_string(), "new_check");
    }
}
