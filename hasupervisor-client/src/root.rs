//! The top-level [`SupervisorClient`].

use std::future::Future;
use std::sync::Arc;

use crate::builder::SupervisorClientBuilder;
use crate::client::ApiClient;
use crate::components::{
    AddonsClient, BackupsClient, DiscoveryClient, HomeAssistantClient, HostClient, JobsClient,
    MountsClient, NetworkClient, OSClient, ResolutionClient, StoreClient,
    SupervisorManagementClient,
};
use crate::models::root::{AvailableUpdate, AvailableUpdates, RootInfo};
use crate::{BuildError, CallOptions, SupervisorError};

/// Client for the Home Assistant Supervisor API.
///
/// Cloning is cheap; clones share one session. Component clients are
/// borrowed views obtained from the accessors.
///
/// # Example
///
/// ```ignore
/// use hasupervisor_client::SupervisorClient;
///
/// let client = SupervisorClient::new("http://supervisor", token)?;
/// let info = client.info().await?;
/// for addon in client.addons().list().await? {
///     println!("{} {:?}", addon.base.slug, addon.state);
/// }
/// client.close();
/// ```
#[derive(Clone, Debug)]
pub struct SupervisorClient {
    api: Arc<ApiClient>,
}

impl SupervisorClient {
    /// Build a client with default settings.
    pub fn new<H: Into<String>, T: Into<String>>(api_host: H, token: T) -> Result<Self, BuildError> {
        Self::builder(api_host, token).build()
    }

    pub fn builder<H: Into<String>, T: Into<String>>(api_host: H, token: T) -> SupervisorClientBuilder {
        SupervisorClientBuilder::new(api_host, token)
    }

    pub(crate) fn from_api(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    /// The low-level client, for endpoints without a typed method.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn addons(&self) -> AddonsClient<'_> {
        AddonsClient::new(&self.api)
    }

    pub fn backups(&self) -> BackupsClient<'_> {
        BackupsClient::new(&self.api)
    }

    pub fn discovery(&self) -> DiscoveryClient<'_> {
        DiscoveryClient::new(&self.api)
    }

    pub fn homeassistant(&self) -> HomeAssistantClient<'_> {
        HomeAssistantClient::new(&self.api)
    }

    pub fn host(&self) -> HostClient<'_> {
        HostClient::new(&self.api)
    }

    pub fn jobs(&self) -> JobsClient<'_> {
        JobsClient::new(&self.api)
    }

    pub fn mounts(&self) -> MountsClient<'_> {
        MountsClient::new(&self.api)
    }

    pub fn network(&self) -> NetworkClient<'_> {
        NetworkClient::new(&self.api)
    }

    pub fn os(&self) -> OSClient<'_> {
        OSClient::new(&self.api)
    }

    pub fn resolution(&self) -> ResolutionClient<'_> {
        ResolutionClient::new(&self.api)
    }

    pub fn store(&self) -> StoreClient<'_> {
        StoreClient::new(&self.api)
    }

    pub fn supervisor(&self) -> SupervisorManagementClient<'_> {
        SupervisorManagementClient::new(&self.api)
    }

    /// Overview of the whole installation.
    pub async fn info(&self) -> Result<RootInfo, SupervisorError> {
        self.api.get("info", CallOptions::new()).await?.decode()
    }

    pub async fn available_updates(&self) -> Result<Vec<AvailableUpdate>, SupervisorError> {
        let updates: AvailableUpdates = self
            .api
            .get("available_updates", CallOptions::new())
            .await?
            .decode()?;
        Ok(updates.available_updates)
    }

    /// Check the update servers for new versions.
    pub async fn refresh_updates(&self) -> Result<(), SupervisorError> {
        self.api.post("refresh_updates", CallOptions::new()).await?;
        Ok(())
    }

    /// Reload update information without contacting the update servers.
    pub async fn reload_updates(&self) -> Result<(), SupervisorError> {
        self.api.post("reload_updates", CallOptions::new()).await?;
        Ok(())
    }

    /// Release the session if this client created it. Shared sessions stay open.
    pub fn close(&self) {
        self.api.close();
    }

    pub fn is_closed(&self) -> bool {
        self.api.is_closed()
    }

    /// Run `f` with this client and close it afterwards, whatever `f` returned.
    pub async fn scoped<F, Fut, T>(&self, f: F) -> T
    where
        F: FnOnce(SupervisorClient) -> Fut,
        Fut: Future<Output = T>,
    {
        let out = f(self.clone()).await;
        self.close();
        out
    }
}
