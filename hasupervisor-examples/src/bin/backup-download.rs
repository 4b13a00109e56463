//! Stream a backup to disk.
//!
//! Usage:
//!   cargo run --bin backup-download -- <slug> [output-file]
//!
//! With no slug the available backups are listed instead.

use std::env;

use futures::StreamExt;
use hasupervisor_client::SupervisorClientBuilder;
use tokio::io::AsyncWriteExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let client = SupervisorClientBuilder::from_env()?.build()?;

    let Some(slug) = env::args().nth(1) else {
        for backup in client.backups().list().await? {
            println!(
                "{}  {}  {:>8.1} MB  {}",
                backup.base.slug,
                backup.base.date.format("%Y-%m-%d %H:%M"),
                backup.base.size,
                backup.base.name
            );
        }
        client.close();
        return Ok(());
    };
    let output = env::args().nth(2).unwrap_or_else(|| format!("{slug}.tar"));

    let mut stream = client.backups().download_backup(&slug, None).await?;
    let expected = stream.content_length();
    let mut file = tokio::fs::File::create(&output).await?;

    let mut written: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        written += chunk.len() as u64;
    }
    file.flush().await?;

    tracing::info!(%slug, %output, bytes = written, "backup downloaded");
    if let Some(expected) = expected.filter(|&n| n != written) {
        anyhow::bail!("expected {expected} bytes, received {written}");
    }

    client.close();
    Ok(())
}
