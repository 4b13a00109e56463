use bytes::Bytes;
use serde_json::{Map, Value};

use crate::client::ApiClient;
use crate::models::addons::{
    AddonsConfigValidate, AddonsList, AddonsOptions, AddonsSecurityOptions, AddonsStats,
    AddonsUninstall, InstalledAddon, InstalledAddonComplete,
};
use crate::{CallOptions, ResponseKind, SupervisorError};

/// Installed add-ons (`addons/`).
#[derive(Clone, Copy, Debug)]
pub struct AddonsClient<'a> {
    api: &'a ApiClient,
}

impl<'a> AddonsClient<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Installed add-ons.
    pub async fn list(&self) -> Result<Vec<InstalledAddon>, SupervisorError> {
        let list: AddonsList = self.api.get("addons", CallOptions::new()).await?.decode()?;
        Ok(list.addons)
    }

    pub async fn addon_info(&self, addon: &str) -> Result<InstalledAddonComplete, SupervisorError> {
        self.api
            .get(&format!("addons/{addon}/info"), CallOptions::new())
            .await?
            .decode()
    }

    pub async fn uninstall_addon(
        &self,
        addon: &str,
        options: Option<&AddonsUninstall>,
    ) -> Result<(), SupervisorError> {
        self.api
            .post(
                &format!("addons/{addon}/uninstall"),
                CallOptions::new().json_opt(options)?,
            )
            .await?;
        Ok(())
    }

    pub async fn start_addon(&self, addon: &str) -> Result<(), SupervisorError> {
        self.api
            .post(&format!("addons/{addon}/start"), CallOptions::new())
            .await?;
        Ok(())
    }

    pub async fn stop_addon(&self, addon: &str) -> Result<(), SupervisorError> {
        self.api
            .post(&format!("addons/{addon}/stop"), CallOptions::new())
            .await?;
        Ok(())
    }

    pub async fn restart_addon(&self, addon: &str) -> Result<(), SupervisorError> {
        self.api
            .post(&format!("addons/{addon}/restart"), CallOptions::new())
            .await?;
        Ok(())
    }

    /// Rebuild a locally built add-on. Waits for the build to finish.
    pub async fn rebuild_addon(&self, addon: &str) -> Result<(), SupervisorError> {
        self.api
            .post(
                &format!("addons/{addon}/rebuild"),
                CallOptions::new().no_timeout(),
            )
            .await?;
        Ok(())
    }

    pub async fn addon_options(
        &self,
        addon: &str,
        options: &AddonsOptions,
    ) -> Result<(), SupervisorError> {
        self.api
            .post(
                &format!("addons/{addon}/options"),
                CallOptions::new().json(options)?,
            )
            .await?;
        Ok(())
    }

    /// Check a configuration against the add-on's schema without saving it.
    pub async fn addon_config_validate(
        &self,
        addon: &str,
        config: Map<String, Value>,
    ) -> Result<AddonsConfigValidate, SupervisorError> {
        self.api
            .post(
                &format!("addons/{addon}/options/validate"),
                CallOptions::new()
                    .json_value(Value::Object(config))
                    .response(ResponseKind::Json),
            )
            .await?
            .decode()
    }

    /// The add-on's effective configuration.
    pub async fn addon_config(&self, addon: &str) -> Result<Map<String, Value>, SupervisorError> {
        match self
            .api
            .get(&format!("addons/{addon}/options/config"), CallOptions::new())
            .await?
            .into_json()?
        {
            Value::Object(config) => Ok(config),
            other => Err(SupervisorError::Response(format!(
                "expected a configuration object, got {other}"
            ))),
        }
    }

    /// Write raw bytes to the add-on's stdin.
    pub async fn addon_stdin(&self, addon: &str, data: impl Into<Bytes>) -> Result<(), SupervisorError> {
        self.api
            .post(&format!("addons/{addon}/stdin"), CallOptions::new().raw(data))
            .await?;
        Ok(())
    }

    pub async fn addon_security(
        &self,
        addon: &str,
        options: &AddonsSecurityOptions,
    ) -> Result<(), SupervisorError> {
        self.api
            .post(
                &format!("addons/{addon}/security"),
                CallOptions::new().json(options)?,
            )
            .await?;
        Ok(())
    }

    pub async fn addon_stats(&self, addon: &str) -> Result<AddonsStats, SupervisorError> {
        self.api
            .get(&format!("addons/{addon}/stats"), CallOptions::new())
            .await?
            .decode()
    }

    /// Reload add-on information from disk.
    pub async fn reload(&self) -> Result<(), SupervisorError> {
        self.api.post("addons/reload", CallOptions::new()).await?;
        Ok(())
    }

    pub async fn addon_changelog(&self, addon: &str) -> Result<String, SupervisorError> {
        self.api
            .get(
                &format!("addons/{addon}/changelog"),
                CallOptions::new().response(ResponseKind::Text),
            )
            .await?
            .into_text()
    }

    pub async fn addon_documentation(&self, addon: &str) -> Result<String, SupervisorError> {
        self.api
            .get(
                &format!("addons/{addon}/documentation"),
                CallOptions::new().response(ResponseKind::Text),
            )
            .await?
            .into_text()
    }
}
