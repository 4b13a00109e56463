use uuid::Uuid;

use crate::client::ApiClient;
use crate::models::discovery::{Discovery, DiscoveryConfig, DiscoveryList, SetDiscovery};
use crate::{CallOptions, ResponseKind, SupervisorError};

/// Service discovery (`discovery/`).
#[derive(Clone, Copy, Debug)]
pub struct DiscoveryClient<'a> {
    api: &'a ApiClient,
}

impl<'a> DiscoveryClient<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> Result<Vec<Discovery>, SupervisorError> {
        let list: DiscoveryList = self.api.get("discovery", CallOptions::new()).await?.decode()?;
        Ok(list.discovery)
    }

    pub async fn get(&self, uuid: Uuid) -> Result<Discovery, SupervisorError> {
        self.api
            .get(&format!("discovery/{}", uuid.simple()), CallOptions::new())
            .await?
            .decode()
    }

    pub async fn delete(&self, uuid: Uuid) -> Result<(), SupervisorError> {
        self.api
            .delete(&format!("discovery/{}", uuid.simple()), CallOptions::new())
            .await?;
        Ok(())
    }

    /// Announce a service and return the discovery id.
    pub async fn set(&self, config: &DiscoveryConfig) -> Result<Uuid, SupervisorError> {
        let set: SetDiscovery = self
            .api
            .post(
                "discovery",
                CallOptions::new().json(config)?.response(ResponseKind::Json),
            )
            .await?
            .decode()?;
        Ok(set.uuid)
    }
}
