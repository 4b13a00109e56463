//! Upload a backup tarball.
//!
//! Usage:
//!   cargo run --bin backup-upload -- <file> [location...]
//!
//! Locations name backup mounts; `.local` is local storage.

use std::collections::BTreeSet;
use std::env;
use std::path::Path;

use hasupervisor_client::models::LOCAL_LOCATION;
use hasupervisor_client::models::backups::UploadBackupOptions;
use hasupervisor_client::{MultipartUpload, SupervisorClientBuilder};
use tokio_util::io::ReaderStream;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        anyhow::bail!("usage: backup-upload <file> [location...]");
    };
    let location: BTreeSet<Option<String>> = args
        .map(|l| if l == LOCAL_LOCATION { None } else { Some(l) })
        .collect();

    let filename = Path::new(&path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());
    let file = tokio::fs::File::open(&path).await?;
    let upload = MultipartUpload::new(ReaderStream::new(file));

    let client = SupervisorClientBuilder::from_env()?.build()?;
    let slug = client
        .backups()
        .upload_backup(upload, Some(&UploadBackupOptions { location, filename }))
        .await?;
    tracing::info!(%path, %slug, "backup uploaded");

    client.close();
    Ok(())
}
