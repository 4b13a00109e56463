use crate::client::ApiClient;
use crate::components::options_body;
use crate::models::os::{
    DataDisk, DataDiskList, GreenInfo, GreenOptions, MigrateDataOptions, OSInfo, OSUpdate,
    SetBootSlotOptions, YellowInfo, YellowOptions,
};
use crate::{CallOptions, SupervisorError};

/// Home Assistant OS (`os/`).
#[derive(Clone, Copy, Debug)]
pub struct OSClient<'a> {
    api: &'a ApiClient,
}

impl<'a> OSClient<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn info(&self) -> Result<OSInfo, SupervisorError> {
        self.api.get("os/info", CallOptions::new()).await?.decode()
    }

    /// Update the OS. Waits for the update to finish.
    pub async fn update(&self, options: Option<&OSUpdate>) -> Result<(), SupervisorError> {
        self.api
            .post("os/update", CallOptions::new().json_opt(options)?.no_timeout())
            .await?;
        Ok(())
    }

    /// Load host configuration from a USB stick.
    pub async fn config_sync(&self) -> Result<(), SupervisorError> {
        self.api.post("os/config/sync", CallOptions::new()).await?;
        Ok(())
    }

    /// Move the data partition to another disk.
    pub async fn migrate_data(&self, options: &MigrateDataOptions) -> Result<(), SupervisorError> {
        self.api
            .post("os/datadisk/move", CallOptions::new().json(options)?)
            .await?;
        Ok(())
    }

    pub async fn list_data_disks(&self) -> Result<Vec<DataDisk>, SupervisorError> {
        let list: DataDiskList = self
            .api
            .get("os/datadisk/list", CallOptions::new())
            .await?
            .decode()?;
        Ok(list.disks)
    }

    /// Wipe the data partition and reboot.
    pub async fn wipe_data(&self) -> Result<(), SupervisorError> {
        self.api.post("os/datadisk/wipe", CallOptions::new()).await?;
        Ok(())
    }

    pub async fn set_boot_slot(&self, options: &SetBootSlotOptions) -> Result<(), SupervisorError> {
        self.api
            .post("os/boot-slot", CallOptions::new().json(options)?)
            .await?;
        Ok(())
    }

    pub async fn green_info(&self) -> Result<GreenInfo, SupervisorError> {
        self.api
            .get("os/boards/green", CallOptions::new())
            .await?
            .decode()
    }

    pub async fn green_options(&self, options: &GreenOptions) -> Result<(), SupervisorError> {
        self.api.post("os/boards/green", options_body(options)?).await?;
        Ok(())
    }

    pub async fn yellow_info(&self) -> Result<YellowInfo, SupervisorError> {
        self.api
            .get("os/boards/yellow", CallOptions::new())
            .await?
            .decode()
    }

    pub async fn yellow_options(&self, options: &YellowOptions) -> Result<(), SupervisorError> {
        self.api.post("os/boards/yellow", options_body(options)?).await?;
        Ok(())
    }
}
