use crate::client::ApiClient;
use crate::components::{POWER_TIMEOUT, options_body};
use crate::models::homeassistant::{
    HomeAssistantInfo, HomeAssistantOptions, HomeAssistantRebuildOptions,
    HomeAssistantRestartOptions, HomeAssistantStats, HomeAssistantStopOptions,
    HomeAssistantUpdateOptions,
};
use crate::{CallOptions, SupervisorError};

/// Home Assistant core (`core/`).
#[derive(Clone, Copy, Debug)]
pub struct HomeAssistantClient<'a> {
    api: &'a ApiClient,
}

impl<'a> HomeAssistantClient<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn info(&self) -> Result<HomeAssistantInfo, SupervisorError> {
        self.api.get("core/info", CallOptions::new()).await?.decode()
    }

    pub async fn stats(&self) -> Result<HomeAssistantStats, SupervisorError> {
        self.api.get("core/stats", CallOptions::new()).await?.decode()
    }

    pub async fn options(&self, options: &HomeAssistantOptions) -> Result<(), SupervisorError> {
        self.api.post("core/options", options_body(options)?).await?;
        Ok(())
    }

    /// Update core. Waits for the update to finish.
    pub async fn update(
        &self,
        options: Option<&HomeAssistantUpdateOptions>,
    ) -> Result<(), SupervisorError> {
        let call = match options {
            Some(options) => options_body(options)?,
            None => CallOptions::new(),
        };
        self.api.post("core/update", call.no_timeout()).await?;
        Ok(())
    }

    pub async fn restart(
        &self,
        options: Option<&HomeAssistantRestartOptions>,
    ) -> Result<(), SupervisorError> {
        let call = match options {
            Some(options) => options_body(options)?,
            None => CallOptions::new(),
        };
        self.api.post("core/restart", call.timeout(POWER_TIMEOUT)).await?;
        Ok(())
    }

    pub async fn stop(&self, options: Option<&HomeAssistantStopOptions>) -> Result<(), SupervisorError> {
        self.api
            .post(
                "core/stop",
                CallOptions::new().json_opt(options)?.timeout(POWER_TIMEOUT),
            )
            .await?;
        Ok(())
    }

    pub async fn start(&self) -> Result<(), SupervisorError> {
        self.api.post("core/start", CallOptions::new()).await?;
        Ok(())
    }

    /// Ask core to validate its configuration.
    pub async fn check_config(&self) -> Result<(), SupervisorError> {
        self.api.post("core/check", CallOptions::new()).await?;
        Ok(())
    }

    pub async fn rebuild(
        &self,
        options: Option<&HomeAssistantRebuildOptions>,
    ) -> Result<(), SupervisorError> {
        let call = match options {
            Some(options) => options_body(options)?,
            None => CallOptions::new(),
        };
        self.api.post("core/rebuild", call.timeout(POWER_TIMEOUT)).await?;
        Ok(())
    }
}
