use hasupervisor_core::RequestModel;
use serde_json::Value;

use crate::client::ApiClient;
use crate::models::mounts::{MountRequest, MountsInfo, MountsOptions};
use crate::{CallOptions, SupervisorError};

/// Network storage mounts (`mounts/`).
#[derive(Clone, Copy, Debug)]
pub struct MountsClient<'a> {
    api: &'a ApiClient,
}

impl<'a> MountsClient<'a> {
    pub(crate) fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn info(&self) -> Result<MountsInfo, SupervisorError> {
        self.api.get("mounts", CallOptions::new()).await?.decode()
    }

    pub async fn options(&self, options: &MountsOptions) -> Result<(), SupervisorError> {
        self.api
            .post("mounts/options", CallOptions::new().json(options)?)
            .await?;
        Ok(())
    }

    /// Create a mount. The name travels in the body next to the configuration.
    pub async fn create_mount(&self, name: &str, config: &MountRequest) -> Result<(), SupervisorError> {
        let mut body = config
            .to_wire()
            .map_err(|e| SupervisorError::Encode(e.to_string()))?;
        body.insert("name".to_owned(), Value::String(name.to_owned()));
        self.api
            .post("mounts", CallOptions::new().json_value(Value::Object(body)))
            .await?;
        Ok(())
    }

    pub async fn update_mount(&self, name: &str, config: &MountRequest) -> Result<(), SupervisorError> {
        self.api
            .put(&format!("mounts/{name}"), CallOptions::new().json(config)?)
            .await?;
        Ok(())
    }

    pub async fn delete_mount(&self, name: &str) -> Result<(), SupervisorError> {
        self.api
            .delete(&format!("mounts/{name}"), CallOptions::new())
            .await?;
        Ok(())
    }

    pub async fn reload_mount(&self, name: &str) -> Result<(), SupervisorError> {
        self.api
            .post(&format!("mounts/{name}/reload"), CallOptions::new())
            .await?;
        Ok(())
    }
}
