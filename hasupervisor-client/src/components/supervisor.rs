use crate::client::ApiClient;
use crate::components::options_body;
use crate::models::supervisor::{SupervisorInfo, SupervisorOptions, SupervisorStats, SupervisorUpdateOptions};
use crate::{CallOptions, ResponseKind, SupervisorError};

/// The Supervisor itself (`supervisor/`).
#[derive(Clone, Copy, Debug)]
pub struct SupervisorManagementClient<'a> {
    api: &'a ApiClient,
}

impl<'a> SupervisorManagementClient<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    /// Succeeds if the Supervisor is reachable.
    pub async fn ping(&self) -> Result<(), SupervisorError> {
        self.api
            .get("supervisor/ping", CallOptions::new().response(ResponseKind::None))
            .await?;
        Ok(())
    }

    pub async fn info(&self) -> Result<SupervisorInfo, SupervisorError> {
        self.api
            .get("supervisor/info", CallOptions::new())
            .await?
            .decode()
    }

    pub async fn stats(&self) -> Result<SupervisorStats, SupervisorError> {
        self.api
            .get("supervisor/stats", CallOptions::new())
            .await?
            .decode()
    }

    /// Update the Supervisor and wait for it to come back.
    ///
    /// A target version is only honored on development systems.
    pub async fn update(&self, options: Option<&SupervisorUpdateOptions>) -> Result<(), SupervisorError> {
        self.api
            .post("supervisor/update", CallOptions::new().json_opt(options)?.no_timeout())
            .await?;
        Ok(())
    }

    pub async fn reload(&self) -> Result<(), SupervisorError> {
        self.api.post("supervisor/reload", CallOptions::new()).await?;
        Ok(())
    }

    pub async fn restart(&self) -> Result<(), SupervisorError> {
        self.api.post("supervisor/restart", CallOptions::new()).await?;
        Ok(())
    }

    pub async fn options(&self, options: &SupervisorOptions) -> Result<(), SupervisorError> {
        self.api
            .post("supervisor/options", options_body(options)?)
            .await?;
        Ok(())
    }

    /// Repair Docker overlay issues.
    pub async fn repair(&self) -> Result<(), SupervisorError> {
        self.api.post("supervisor/repair", CallOptions::new()).await?;
        Ok(())
    }
}
