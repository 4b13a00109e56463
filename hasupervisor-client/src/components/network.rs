use crate::client::ApiClient;
use crate::components::options_body;
use crate::models::network::{
    AccessPoint, AccessPointList, NetworkInfo, NetworkInterface, NetworkInterfaceConfig,
    VlanConfig,
};
use crate::{CallOptions, SupervisorError};

/// Host networking (`network/`).
#[derive(Clone, Copy, Debug)]
pub struct NetworkClient<'a> {
    api: &'a ApiClient,
}

impl<'a> NetworkClient<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn info(&self) -> Result<NetworkInfo, SupervisorError> {
        self.api.get("network/info", CallOptions::new()).await?.decode()
    }

    pub async fn reload(&self) -> Result<(), SupervisorError> {
        self.api.post("network/reload", CallOptions::new()).await?;
        Ok(())
    }

    /// Interface by name, or `default` for the primary one.
    pub async fn interface_info(&self, interface: &str) -> Result<NetworkInterface, SupervisorError> {
        self.api
            .get(&format!("network/interface/{interface}/info"), CallOptions::new())
            .await?
            .decode()
    }

    pub async fn update_interface(
        &self,
        interface: &str,
        config: &NetworkInterfaceConfig,
    ) -> Result<(), SupervisorError> {
        self.api
            .post(
                &format!("network/interface/{interface}/update"),
                options_body(config)?,
            )
            .await?;
        Ok(())
    }

    /// Scan for wireless access points.
    pub async fn access_points(&self, interface: &str) -> Result<Vec<AccessPoint>, SupervisorError> {
        let list: AccessPointList = self
            .api
            .get(
                &format!("network/interface/{interface}/accesspoints"),
                CallOptions::new(),
            )
            .await?
            .decode()?;
        Ok(list.accesspoints)
    }

    /// Create a VLAN on top of `interface`.
    pub async fn save_vlan(
        &self,
        interface: &str,
        vlan_id: u16,
        config: Option<&VlanConfig>,
    ) -> Result<(), SupervisorError> {
        let call = match config {
            Some(config) => options_body(config)?,
            None => CallOptions::new(),
        };
        self.api
            .post(&format!("network/interface/{interface}/vlan/{vlan_id}"), call)
            .await?;
        Ok(())
    }
}
