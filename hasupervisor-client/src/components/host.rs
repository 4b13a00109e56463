use crate::client::ApiClient;
use crate::components::POWER_TIMEOUT;
use crate::models::host::{HostInfo, HostOptions, RebootOptions, Service, ServiceList, ShutdownOptions};
use crate::{CallOptions, SupervisorError};

/// Host system (`host/`).
#[derive(Clone, Copy, Debug)]
pub struct HostClient<'a> {
    api: &'a ApiClient,
}

impl<'a> HostClient<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn info(&self) -> Result<HostInfo, SupervisorError> {
        self.api.get("host/info", CallOptions::new()).await?.decode()
    }

    pub async fn reboot(&self, options: Option<&RebootOptions>) -> Result<(), SupervisorError> {
        self.api
            .post(
                "host/reboot",
                CallOptions::new().json_opt(options)?.timeout(POWER_TIMEOUT),
            )
            .await?;
        Ok(())
    }

    pub async fn shutdown(&self, options: Option<&ShutdownOptions>) -> Result<(), SupervisorError> {
        self.api
            .post(
                "host/shutdown",
                CallOptions::new().json_opt(options)?.timeout(POWER_TIMEOUT),
            )
            .await?;
        Ok(())
    }

    pub async fn reload(&self) -> Result<(), SupervisorError> {
        self.api.post("host/reload", CallOptions::new()).await?;
        Ok(())
    }

    pub async fn options(&self, options: &HostOptions) -> Result<(), SupervisorError> {
        self.api
            .post("host/options", CallOptions::new().json(options)?)
            .await?;
        Ok(())
    }

    pub async fn services(&self) -> Result<Vec<Service>, SupervisorError> {
        let list: ServiceList = self.api.get("host/services", CallOptions::new()).await?.decode()?;
        Ok(list.services)
    }
}
