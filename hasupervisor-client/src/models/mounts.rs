//! Network storage mounts (`mounts/`).

use std::path::PathBuf;

use hasupervisor_core::Field;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MountUsage {
    Backup,
    Media,
    Share,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MountState {
    Active,
    Activating,
    Deactivating,
    Failed,
    Inactive,
    Maintenance,
    Reloading,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MountCifsVersion {
    #[serde(rename = "1.0")]
    Legacy1_0,
    #[serde(rename = "2.0")]
    Legacy2_0,
}

/// Fields shared by every mount.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MountBase {
    pub usage: MountUsage,
    pub server: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

/// State reported for an existing mount.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MountStatus {
    pub name: String,
    pub read_only: bool,
    pub state: Option<MountState>,
    pub user_path: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CifsMountResponse {
    #[serde(flatten)]
    pub mount: MountBase,
    #[serde(flatten)]
    pub status: MountStatus,
    pub share: String,
    /// `Unset` when the Supervisor leaves the key out.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub version: Field<MountCifsVersion>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NfsMountResponse {
    #[serde(flatten)]
    pub mount: MountBase,
    #[serde(flatten)]
    pub status: MountStatus,
    pub path: PathBuf,
}

/// A mount as reported by `GET mounts`, tagged by `type`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MountResponse {
    Cifs(CifsMountResponse),
    Nfs(NfsMountResponse),
}

impl MountResponse {
    pub fn base(&self) -> &MountBase {
        match self {
            MountResponse::Cifs(m) => &m.mount,
            MountResponse::Nfs(m) => &m.mount,
        }
    }

    pub fn status(&self) -> &MountStatus {
        match self {
            MountResponse::Cifs(m) => &m.status,
            MountResponse::Nfs(m) => &m.status,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CifsMountRequest {
    #[serde(flatten)]
    pub mount: MountBase,
    pub share: String,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub version: Field<MountCifsVersion>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub read_only: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub username: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub password: Field<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NfsMountRequest {
    #[serde(flatten)]
    pub mount: MountBase,
    pub path: PathBuf,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub read_only: Field<bool>,
}

/// Body of `POST mounts` and `PUT mounts/{name}`, tagged by `type`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MountRequest {
    Cifs(CifsMountRequest),
    Nfs(NfsMountRequest),
}

/// Response of `GET mounts`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MountsInfo {
    pub default_backup_mount: Option<String>,
    pub mounts: Vec<MountResponse>,
}

/// Body of `POST mounts/options`. `None` clears the default backup mount.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MountsOptions {
    pub default_backup_mount: Option<String>,
}

request_models!(MountRequest, MountsOptions);
response_models!(MountsInfo);
