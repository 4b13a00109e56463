//! Component clients, one per Supervisor resource group.
//!
//! Each client borrows the shared [`ApiClient`](crate::ApiClient) and maps
//! its methods one to one onto Supervisor endpoints. Obtain them from
//! [`SupervisorClient`](crate::SupervisorClient).

use std::time::Duration;

use serde_json::Value;

use crate::models::OptionsModel;
use crate::{CallOptions, SupervisorError};

mod addons;
mod backups;
mod discovery;
mod homeassistant;
mod host;
mod jobs;
mod mounts;
mod network;
mod os;
mod resolution;
mod store;
mod supervisor;

pub use addons::AddonsClient;
pub use backups::BackupsClient;
pub use discovery::DiscoveryClient;
pub use homeassistant::HomeAssistantClient;
pub use host::HostClient;
pub use jobs::JobsClient;
pub use mounts::MountsClient;
pub use network::NetworkClient;
pub use os::OSClient;
pub use resolution::ResolutionClient;
pub use store::StoreClient;
pub use supervisor::SupervisorManagementClient;

/// Deadline for power actions that take the host or core down.
pub(crate) const POWER_TIMEOUT: Duration = Duration::from_secs(60);

/// Encode an options model, refusing one with nothing set.
pub(crate) fn options_body<T: OptionsModel>(model: &T) -> Result<CallOptions, SupervisorError> {
    let map = model
        .to_wire()
        .map_err(|e| SupervisorError::Encode(e.to_string()))?;
    if map.is_empty() {
        return Err(SupervisorError::Encode(
            "At least one field must have a value".to_owned(),
        ));
    }
    Ok(CallOptions::new().json_value(Value::Object(map)))
}
