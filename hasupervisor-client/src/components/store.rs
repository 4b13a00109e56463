use crate::client::ApiClient;
use crate::models::store::{
    Repository, StoreAddRepository, StoreAddon, StoreAddonComplete, StoreAddonInstall,
    StoreAddonUpdate, StoreAddonsList, StoreInfo,
};
use crate::{CallOptions, ResponseKind, SupervisorError};

/// Add-on store (`store/`).
#[derive(Clone, Copy, Debug)]
pub struct StoreClient<'a> {
    api: &'a ApiClient,
}

impl<'a> StoreClient<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn info(&self) -> Result<StoreInfo, SupervisorError> {
        self.api.get("store", CallOptions::new()).await?.decode()
    }

    pub async fn addons_list(&self) -> Result<Vec<StoreAddon>, SupervisorError> {
        let list: StoreAddonsList = self
            .api
            .get("store/addons", CallOptions::new())
            .await?
            .decode()?;
        Ok(list.addons)
    }

    pub async fn addon_info(&self, addon: &str) -> Result<StoreAddonComplete, SupervisorError> {
        self.api
            .get(&format!("store/addons/{addon}"), CallOptions::new())
            .await?
            .decode()
    }

    pub async fn addon_changelog(&self, addon: &str) -> Result<String, SupervisorError> {
        self.api
            .get(
                &format!("store/addons/{addon}/changelog"),
                CallOptions::new().response(ResponseKind::Text),
            )
            .await?
            .into_text()
    }

    pub async fn addon_documentation(&self, addon: &str) -> Result<String, SupervisorError> {
        self.api
            .get(
                &format!("store/addons/{addon}/documentation"),
                CallOptions::new().response(ResponseKind::Text),
            )
            .await?
            .into_text()
    }

    /// Succeeds if the add-on can be installed on this system.
    ///
    /// Otherwise fails with one of the `AddonNotSupported*` kinds, or a plain
    /// bad request for restrictions this client does not know yet.
    pub async fn addon_availability(&self, addon: &str) -> Result<(), SupervisorError> {
        self.api
            .get(
                &format!("store/addons/{addon}/availability"),
                CallOptions::new().response(ResponseKind::None),
            )
            .await?;
        Ok(())
    }

    /// Install an add-on. Without `background` this waits for the install
    /// and has no deadline.
    pub async fn install_addon(
        &self,
        addon: &str,
        options: Option<&StoreAddonInstall>,
    ) -> Result<(), SupervisorError> {
        let mut call = CallOptions::new().json_opt(options)?;
        if !options.is_some_and(StoreAddonInstall::is_background) {
            call = call.no_timeout();
        }
        self.api
            .post(&format!("store/addons/{addon}/install"), call)
            .await?;
        Ok(())
    }

    pub async fn update_addon(
        &self,
        addon: &str,
        options: Option<&StoreAddonUpdate>,
    ) -> Result<(), SupervisorError> {
        let mut call = CallOptions::new().json_opt(options)?;
        if !options.is_some_and(StoreAddonUpdate::is_background) {
            call = call.no_timeout();
        }
        self.api
            .post(&format!("store/addons/{addon}/update"), call)
            .await?;
        Ok(())
    }

    pub async fn reload(&self) -> Result<(), SupervisorError> {
        self.api.post("store/reload", CallOptions::new()).await?;
        Ok(())
    }

    /// All repositories. The payload is a bare list rather than an object.
    pub async fn repositories_list(&self) -> Result<Vec<Repository>, SupervisorError> {
        let data = self
            .api
            .get("store/repositories", CallOptions::new())
            .await?
            .into_json()?;
        hasupervisor_core::from_wire(data)
            .map_err(|e| SupervisorError::Response(format!("failed to decode response data: {e}")))
    }

    pub async fn repository_info(&self, repository: &str) -> Result<Repository, SupervisorError> {
        self.api
            .get(&format!("store/repositories/{repository}"), CallOptions::new())
            .await?
            .decode()
    }

    pub async fn add_repository(&self, options: &StoreAddRepository) -> Result<(), SupervisorError> {
        self.api
            .post("store/repositories", CallOptions::new().json(options)?)
            .await?;
        Ok(())
    }

    pub async fn remove_repository(&self, repository: &str) -> Result<(), SupervisorError> {
        self.api
            .delete(&format!("store/repositories/{repository}"), CallOptions::new())
            .await?;
        Ok(())
    }
}
