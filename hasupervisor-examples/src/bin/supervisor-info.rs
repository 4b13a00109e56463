//! Supervisor connectivity check.
//!
//! Pings the Supervisor, then prints the installation overview, the
//! installed add-ons and any pending updates.
//!
//! Usage (inside an add-on, where both variables are provided):
//!   cargo run --bin supervisor-info
//!
//! Or against a remote Supervisor:
//!   SUPERVISOR_API_URL=http://homeassistant.local:8123/api/hassio \
//!   SUPERVISOR_TOKEN=... cargo run --bin supervisor-info

use std::time::Duration;

use hasupervisor_client::{ErrorKind, SupervisorClientBuilder};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let client = SupervisorClientBuilder::from_env()?
        .request_timeout(Duration::from_secs(5))
        .build()?;

    client
        .scoped(|client| async move {
            client.supervisor().ping().await?;
            tracing::info!("supervisor is reachable");

            let info = client.info().await?;
            println!("Supervisor {} ({:?})", info.supervisor, info.state);
            println!("  Home Assistant: {}", info.homeassistant.as_deref().unwrap_or("-"));
            println!("  OS:             {}", info.operating_system.as_deref().unwrap_or("-"));
            println!("  Arch:           {}", info.arch);
            println!("  Channel:        {:?}", info.channel);

            println!();
            println!("Add-ons:");
            match client.addons().list().await {
                Ok(addons) => {
                    for addon in addons {
                        println!(
                            "  {:<32} {:<12} {:?}",
                            addon.base.slug,
                            addon.base.version.as_deref().unwrap_or("-"),
                            addon.state
                        );
                    }
                }
                // Tokens without the manager role cannot list add-ons
                Err(e) if e.is(ErrorKind::Forbidden) => println!("  (not permitted)"),
                Err(e) => return Err(e.into()),
            }

            println!();
            let updates = client.available_updates().await?;
            if updates.is_empty() {
                println!("Everything is up to date.");
            }
            for update in updates {
                println!(
                    "Update available: {} -> {} ({:?})",
                    update.name.as_deref().unwrap_or(&update.panel_path),
                    update.version_latest,
                    update.update_type
                );
            }
            Ok::<_, anyhow::Error>(())
        })
        .await
}
