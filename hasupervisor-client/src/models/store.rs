//! Add-on store (`store/`).

use hasupervisor_core::Field;
use serde::{Deserialize, Serialize};

use super::addons::{AddonBase, AddonInfoFields};

/// An add-on as listed by the store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreAddon {
    #[serde(flatten)]
    pub base: AddonBase,
    pub installed: bool,
}

/// Response of `GET store/addons/{addon}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreAddonComplete {
    #[serde(flatten)]
    pub addon: StoreAddon,
    #[serde(flatten)]
    pub info: AddonInfoFields,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub slug: String,
    pub name: String,
    pub source: String,
    pub url: Option<String>,
    pub maintainer: Option<String>,
}

/// Response of `GET store`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreInfo {
    pub addons: Vec<StoreAddon>,
    pub repositories: Vec<Repository>,
}

/// Response of `GET store/addons`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreAddonsList {
    pub addons: Vec<StoreAddon>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreAddonInstall {
    /// Return once the install job is queued instead of when it finishes.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub background: Field<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreAddonUpdate {
    /// Take a backup of the add-on first.
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub backup: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_unset")]
    pub background: Field<bool>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreAddRepository {
    pub repository: String,
}

impl StoreAddonInstall {
    pub(crate) fn is_background(&self) -> bool {
        matches!(self.background, Field::Value(true))
    }
}

impl StoreAddonUpdate {
    pub(crate) fn is_background(&self) -> bool {
        matches!(self.background, Field::Value(true))
    }
}

request_models!(StoreAddonInstall, StoreAddonUpdate, StoreAddRepository);
response_models!(StoreInfo, StoreAddonsList, StoreAddonComplete, Repository);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::addons::{SupervisorRole, fixtures};
    use hasupervisor_core::{RequestModel, ResponseModel, to_wire};
    use serde_json::{Value, json};

    fn store_addon(slug: &str, name: &str) -> Value {
        let mut addon = fixtures::addon_base(slug, name);
        addon["installed"] = json!(false);
        addon
    }

    #[test]
    fn test_store_info() {
        let info = StoreInfo::from_wire(json!({
            "addons": [store_addon("d5369777_music_assistant", "Music Assistant Server")],
            "repositories": [
                {
                    "slug": "local",
                    "name": "Local add-ons",
                    "source": "/data/addons/local",
                    "url": null,
                    "maintainer": "you"
                }
            ]
        }))
        .unwrap();
        assert_eq!(info.repositories[0].slug, "local");
        assert_eq!(info.addons[0].base.slug, "d5369777_music_assistant");
        assert!(!info.addons[0].installed);
    }

    #[test]
    fn test_store_addon_complete_round_trip() {
        let mut info = fixtures::info_fields();
        info["hassio_api"] = json!(false);
        info["hassio_role"] = json!("default");
        let data = fixtures::merge(&[store_addon("core_mosquitto", "Mosquitto broker"), info]);

        let addon = StoreAddonComplete::from_wire(data.clone()).unwrap();
        assert!(addon.info.signed);
        assert!(!addon.info.supervisor_api);
        assert_eq!(addon.info.supervisor_role, SupervisorRole::Default);
        assert_eq!(Value::Object(to_wire(&addon).unwrap()), data);
    }

    #[test]
    fn test_update_encoding() {
        let update = StoreAddonUpdate {
            backup: true.into(),
            ..Default::default()
        };
        assert_eq!(Value::Object(update.to_wire().unwrap()), json!({"backup": true}));
        assert!(!update.is_background());
        assert!(StoreAddonInstall { background: true.into() }.is_background());
    }
}
