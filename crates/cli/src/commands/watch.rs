use crate::di::UseCases;
use anyhow::Context;
use merge_dns_domain::Config;
use merge_dns_jobs::{JobRunner, SnapshotStore};
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

pub async fn run(config: &Config, use_cases: &UseCases) -> anyhow::Result<()> {
    let initial = use_cases
        .update
        .execute()
        .await
        .context("Initial merge before watching")?;

    info!(
        local_version = initial.local.version,
        remote_version = initial.remote.version,
        written_version = initial.outcome.version,
        "Initial merge complete"
    );

    let store = SnapshotStore::spawn(initial.local, initial.remote);
    let shutdown = CancellationToken::new();

    let watch = JobRunner::new(store, use_cases.merge.clone())
        .with_local_source(
            use_cases.refresh_local.clone(),
            Duration::from_secs(config.local_source.scrape_interval),
        )
        .with_remote_source(
            use_cases.refresh_remote.clone(),
            Duration::from_secs(config.remote_source.scrape_interval),
        )
        .with_cancellation(shutdown.clone())
        .start();

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Shutdown signal received"),
            Err(e) => warn!(error = %e, "Failed to listen for shutdown signal"),
        }
        shutdown.cancel();
    });

    watch.wait().await.context("Watching sources")?;

    info!("Watch stopped");
    Ok(())
}
