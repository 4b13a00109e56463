//! Backups (`backups/`).

use std::collections::BTreeSet;

use hasupervisor_core::{Field, ModelError};
use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::{LocationSelector, Timestamp};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackupType {
    Full,
    Partial,
}

/// Folders that can be included in a backup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Folder {
    #[serde(rename = "share")]
    Share,
    #[serde(rename = "addons/local")]
    Addons,
    #[serde(rename = "ssl")]
    Ssl,
    #[serde(rename = "media")]
    Media,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackupContent {
    pub homeassistant: bool,
    pub addons: Vec<String>,
    pub folders: Vec<Folder>,
}

/// Fields common to backup summaries and backup details.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackupBaseFields {
    pub slug: String,
    pub name: String,
    pub date: Timestamp,
    #[serde(rename = "type")]
    pub backup_type: BackupType,
    pub size: f64,
    pub size_bytes: i64,
    pub location: Option<String>,
    /// `None` is local storage.
    pub locations: BTreeSet<Option<String>>,
    pub protected: bool,
    pub compressed: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Backup {
    #[serde(flatten)]
    pub base: BackupBaseFields,
    pub content: BackupContent,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackupAddon {
    pub slug: String,
    pub name: String,
    pub version: String,
    pub size: f64,
}

/// Response of `GET backups/{backup}/info`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackupComplete {
    #[serde(flatten)]
    pub base: BackupBaseFields,
    pub supervisor_version: String,
    pub homeassistant: Option<String>,
    pub addons: Vec<BackupAddon>,
    pub repositories: Vec<String>,
    pub folders: Vec<Folder>,
    pub homeassistant_exclude_database: Option<bool>,
    pub extra: Option<Map<String, Value>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackupList {
    pub backups: Vec<Backup>,
}

/// Response of `GET backups/info`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackupsInfo {
    pub backups: Vec<Backup>,
    pub days_until_stale: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackupsOptions {
    pub days_until_stale: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FreezeOptions {
    /// Seconds before the Supervisor thaws on its own.
    pub timeout: i64,
}

/// Add-ons to include in a partial backup or restore.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddonSelection {
    /// Every installed add-on, sent as `"all"`.
    All,
    Slugs(BTreeSet<String>),
}

impl AddonSelection {
    fn is_selected(&self) -> bool {
        match self {
            AddonSelection::All => true,
            AddonSelection::Slugs(slugs) => !slugs.is_empty(),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for AddonSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        AddonSelection::Slugs(iter.into_iter().map(Into::into).collect())
    }
}

impl Serialize for AddonSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AddonSelection::All => serializer.serialize_str("all"),
            AddonSelection::Slugs(slugs) => slugs.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for AddonSelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Keyword(String),
            Slugs(BTreeSet<String>),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Keyword(keyword) if keyword == "all" => Ok(AddonSelection::All),
            Wire::Keyword(other) => Err(D::Error::invalid_value(
                Unexpected::Str(&other),
                &r#""all" or a list of add-on slugs"#,
            )),
            Wire::Slugs(slugs) => Ok(AddonSelection::Slugs(slugs)),
        }
    }
}

/// What a partial backup or restore covers.
///
/// At least one of add-ons, folders or Home Assistant must be selected;
/// [`PartialSelection::new`] refuses an empty selection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SelectionFields")]
pub struct PartialSelection {
    #[serde(skip_serializing_if = "Option::is_none")]
    addons: Option<AddonSelection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    folders: Option<BTreeSet<Folder>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    homeassistant: Option<bool>,
}

impl PartialSelection {
    pub fn new(
        addons: Option<AddonSelection>,
        folders: Option<BTreeSet<Folder>>,
        homeassistant: Option<bool>,
    ) -> Result<Self, ModelError> {
        let selected = addons.as_ref().is_some_and(AddonSelection::is_selected)
            || folders.as_ref().is_some_and(|f| !f.is_empty())
            || homeassistant == Some(true);
        if !selected {
            return Err(ModelError::new(
                "At least one of addons, folders, or homeassistant must have a value",
            ));
        }
        Ok(Self {
            addons,
            folders,
            homeassistant,
        })
    }

    pub fn addons(&self) -> Option<&AddonSelection> {
        self.addons.as_ref()
    }

    pub fn folders(&self) -> Option<&BTreeSet<Folder>> {
        self.folders.as_ref()
    }

    pub fn homeassistant(&self) -> Option<bool> {
        self.homeassistant
    }
}

/// Decoded selection before the non-empty check.
#[derive(Deserialize)]
struct SelectionFields {
    addons: Option<AddonSelection>,
    folders: Option<BTreeSet<Folder>>,
    homeassistant: Option<bool>,
}

impl TryFrom<SelectionFields> for PartialSelection {
    type Error = ModelError;

    fn try_from(fields: SelectionFields) -> Result<Self, Self::Error> {
        PartialSelection::new(fields.addons, fields.folders, fields.homeassistant)
    }
}

/// Body of `POST backups/new/full`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FullBackupOptions {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub password: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub compressed: Field<bool>,
    /// `Null` is local storage.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub location: Field<LocationSelector>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub homeassistant_exclude_database: Field<bool>,
    /// Return once the job is queued instead of waiting for the backup.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub background: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub extra: Field<Map<String, Value>>,
}

/// Body of `POST backups/new/partial`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartialBackupOptions {
    #[serde(flatten)]
    pub backup: FullBackupOptions,
    #[serde(flatten)]
    pub selection: PartialSelection,
}

impl PartialBackupOptions {
    pub fn new(selection: PartialSelection) -> Self {
        Self {
            backup: FullBackupOptions::default(),
            selection,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FullRestoreOptions {
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub password: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub background: Field<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartialRestoreOptions {
    #[serde(flatten)]
    pub restore: FullRestoreOptions,
    #[serde(flatten)]
    pub selection: PartialSelection,
}

impl PartialRestoreOptions {
    pub fn new(selection: PartialSelection) -> Self {
        Self {
            restore: FullRestoreOptions::default(),
            selection,
        }
    }
}

/// Response of the backup and restore calls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackupJob {
    pub job_id: String,
}

/// Response of `POST backups/new/*`. The slug is absent for background calls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewBackup {
    pub job_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// Upload target. Sent as repeated `location` query parameters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadBackupOptions {
    /// `None` is local storage. Empty means the Supervisor default.
    pub location: BTreeSet<Option<String>>,
    /// File name of the multipart part. Defaults to `backup.tar`.
    pub filename: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadedBackup {
    pub slug: String,
}

/// Body of `DELETE backups/{backup}`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoveBackupOptions {
    pub location: BTreeSet<Option<String>>,
}

/// Source of `GET backups/{backup}/download`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DownloadBackupOptions {
    /// `Unset` lets the Supervisor pick, `Null` is local storage.
    pub location: Field<String>,
}

impl DownloadBackupOptions {
    pub(crate) fn query_location(&self) -> Option<String> {
        match &self.location {
            Field::Unset => None,
            Field::Null => Some(super::LOCAL_LOCATION.to_owned()),
            Field::Value(location) => Some(location.clone()),
        }
    }
}

impl UploadBackupOptions {
    pub(crate) fn query_locations(&self) -> Vec<String> {
        self.location
            .iter()
            .map(|l| l.clone().unwrap_or_else(|| super::LOCAL_LOCATION.to_owned()))
            .collect()
    }
}

impl FullBackupOptions {
    pub(crate) fn is_background(&self) -> bool {
        matches!(self.background, Field::Value(true))
    }
}

impl FullRestoreOptions {
    pub(crate) fn is_background(&self) -> bool {
        matches!(self.background, Field::Value(true))
    }
}

request_models!(
    BackupsOptions,
    FreezeOptions,
    FullBackupOptions,
    PartialBackupOptions,
    FullRestoreOptions,
    PartialRestoreOptions,
    RemoveBackupOptions,
);
response_models!(
    BackupList,
    BackupsInfo,
    BackupComplete,
    BackupJob,
    NewBackup,
    UploadedBackup,
);

#[cfg(test)]
mod tests {
    use super::*;
    use hasupervisor_core::{RequestModel, ResponseModel, from_wire, to_wire};
    use serde_json::json;

    fn backup() -> Value {
        json!({
            "slug": "69558789",
            "name": "addon_core_ssh_9.14.0",
            "date": "2024-05-31T16:00:00+00:00",
            "type": "partial",
            "size": 0.01,
            "size_bytes": 10240,
            "location": null,
            "locations": [null, "Test"],
            "protected": false,
            "compressed": true,
            "content": {
                "homeassistant": false,
                "addons": ["core_ssh"],
                "folders": []
            }
        })
    }

    #[test]
    fn test_backup_list_round_trip() {
        let data = json!({"backups": [backup()]});
        let list = BackupList::from_wire(data.clone()).unwrap();
        let first = &list.backups[0];
        assert_eq!(first.base.backup_type, BackupType::Partial);
        assert_eq!(first.base.locations, BTreeSet::from([None, Some("Test".to_owned())]));
        assert_eq!(first.content.addons, vec!["core_ssh"]);
        assert_eq!(Value::Object(to_wire(&list).unwrap()), data);
    }

    #[test]
    fn test_backup_complete() {
        let mut data = backup();
        let map = data.as_object_mut().unwrap();
        map.remove("content");
        map.extend(
            json!({
                "supervisor_version": "2024.05.0",
                "homeassistant": null,
                "addons": [{"slug": "core_ssh", "name": "Terminal & SSH", "version": "9.14.0", "size": 0.01}],
                "repositories": ["core", "local"],
                "folders": ["addons/local", "ssl"],
                "homeassistant_exclude_database": null,
                "extra": {"instance_id": "abc"}
            })
            .as_object()
            .unwrap()
            .clone(),
        );
        let info = BackupComplete::from_wire(data.clone()).unwrap();
        assert_eq!(info.folders, vec![Folder::Addons, Folder::Ssl]);
        assert_eq!(info.addons[0].slug, "core_ssh");
        assert_eq!(Value::Object(to_wire(&info).unwrap()), data);
    }

    #[test]
    fn test_partial_selection_requires_a_value() {
        let err = PartialSelection::new(None, None, None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "At least one of addons, folders, or homeassistant must have a value"
        );
        assert!(PartialSelection::new(Some(AddonSelection::Slugs(BTreeSet::new())), Some(BTreeSet::new()), Some(false)).is_err());
        assert!(PartialSelection::new(None, None, Some(true)).is_ok());
        assert!(PartialSelection::new(Some(AddonSelection::All), None, None).is_ok());
        assert!(PartialSelection::new(None, Some(BTreeSet::from([Folder::Ssl])), None).is_ok());
    }

    #[test]
    fn test_partial_backup_encoding() {
        let selection = PartialSelection::new(
            Some(["core_ssh", "core_mosquitto"].into_iter().collect()),
            Some(BTreeSet::from([Folder::Media, Folder::Share])),
            None,
        )
        .unwrap();
        let mut options = PartialBackupOptions::new(selection);
        options.backup.name = "Test".to_owned().into();
        options.backup.location = Field::Null;
        assert_eq!(
            Value::Object(options.to_wire().unwrap()),
            json!({
                "name": "Test",
                "location": null,
                "addons": ["core_mosquitto", "core_ssh"],
                "folders": ["share", "media"]
            })
        );
    }

    #[test]
    fn test_all_addons_encoding() {
        let selection = PartialSelection::new(Some(AddonSelection::All), None, None).unwrap();
        let options = PartialRestoreOptions::new(selection);
        assert_eq!(Value::Object(options.to_wire().unwrap()), json!({"addons": "all"}));
    }

    #[test]
    fn test_full_backup_defaults_are_omitted() {
        assert!(FullBackupOptions::default().to_wire().unwrap().is_empty());
        let options = FullBackupOptions {
            location: LocationSelector::Set(vec![None, Some("nas".into())]).into(),
            background: true.into(),
            ..Default::default()
        };
        assert!(options.is_background());
        assert_eq!(
            Value::Object(options.to_wire().unwrap()),
            json!({"location": [null, "nas"], "background": true})
        );
    }

    #[test]
    fn test_location_queries() {
        let options = UploadBackupOptions {
            location: BTreeSet::from([None, Some("nas".to_owned())]),
            filename: None,
        };
        assert_eq!(options.query_locations(), vec![".local", "nas"]);

        let mut download = DownloadBackupOptions::default();
        assert_eq!(download.query_location(), None);
        download.location = Field::Null;
        assert_eq!(download.query_location().as_deref(), Some(".local"));
    }

    #[test]
    fn test_new_backup_without_slug() {
        let data = json!({"job_id": "123"});
        let backup = NewBackup::from_wire(data.clone()).unwrap();
        assert_eq!(backup.slug, None);
        assert_eq!(Value::Object(to_wire(&backup).unwrap()), data);
    }

    #[test]
    fn test_full_backup_options_round_trip() {
        let options = FullBackupOptions {
            name: "Nightly".to_owned().into(),
            password: Field::Null,
            location: Field::Null,
            homeassistant_exclude_database: true.into(),
            extra: Field::Value(Map::from_iter([("reason".to_owned(), json!("cron"))])),
            ..Default::default()
        };
        let wire = options.to_wire().unwrap();
        assert_eq!(
            Value::Object(wire.clone()),
            json!({
                "name": "Nightly",
                "password": null,
                "location": null,
                "homeassistant_exclude_database": true,
                "extra": {"reason": "cron"}
            })
        );
        let decoded: FullBackupOptions = from_wire(Value::Object(wire)).unwrap();
        assert_eq!(decoded, options);

        let named = FullBackupOptions {
            location: LocationSelector::from("nas").into(),
            ..Default::default()
        };
        let decoded: FullBackupOptions = from_wire(Value::Object(named.to_wire().unwrap())).unwrap();
        assert_eq!(decoded, named);
    }

    #[test]
    fn test_partial_backup_options_round_trip() {
        let selection = PartialSelection::new(
            Some(AddonSelection::All),
            Some(BTreeSet::from([Folder::Ssl])),
            Some(true),
        )
        .unwrap();
        let mut options = PartialBackupOptions::new(selection);
        options.backup.location = LocationSelector::Set(vec![None, Some("nas".into())]).into();
        options.backup.background = true.into();

        let wire = options.to_wire().unwrap();
        let decoded: PartialBackupOptions = from_wire(Value::Object(wire)).unwrap();
        assert_eq!(decoded, options);

        let restore = PartialRestoreOptions::new(
            PartialSelection::new(Some(["core_ssh"].into_iter().collect()), None, None).unwrap(),
        );
        let decoded: PartialRestoreOptions =
            from_wire(Value::Object(restore.to_wire().unwrap())).unwrap();
        assert_eq!(decoded, restore);
    }

    #[test]
    fn test_partial_selection_decode_requires_a_value() {
        let err = from_wire::<PartialBackupOptions>(json!({"name": "x", "homeassistant": false}))
            .unwrap_err();
        assert!(
            err.to_string()
                .contains("At least one of addons, folders, or homeassistant must have a value")
        );
        assert!(from_wire::<PartialSelection>(json!({"addons": "some"})).is_err());
    }
}
