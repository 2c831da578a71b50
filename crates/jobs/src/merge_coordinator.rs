use crate::snapshot_store::SnapshotHandle;
use merge_dns_application::use_cases::{MergeAndWriteUseCase, MergeOutcome};
use merge_dns_domain::{BlastRadius, DomainError, SourceKind};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// The only writer of the destination artifact.
///
/// Each change event triggers a merge of whatever snapshots are current when
/// it is handled, so a burst of events may produce identical merges. The
/// snapshot pair is copied out of the store before the slow merge and write.
pub struct MergeCoordinator {
    store: SnapshotHandle,
    merge: Arc<MergeAndWriteUseCase>,
    events: mpsc::Receiver<SourceKind>,
    shutdown: CancellationToken,
}

impl MergeCoordinator {
    pub fn new(
        store: SnapshotHandle,
        merge: Arc<MergeAndWriteUseCase>,
        events: mpsc::Receiver<SourceKind>,
    ) -> Self {
        Self {
            store,
            merge,
            events,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Handles events until cancelled, until every producer is gone, or until
    /// a merge fails with an error that cannot be fixed by waiting.
    pub async fn run(mut self) -> Result<(), DomainError> {
        info!(destination = self.merge.location(), "Starting merge coordinator");

        loop {
            let reason = tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("MergeCoordinator: shutting down");
                    return Ok(());
                }
                event = self.events.recv() => match event {
                    Some(reason) => reason,
                    None => {
                        info!("MergeCoordinator: all sources stopped");
                        return Ok(());
                    }
                },
            };

            match self.merge_once(reason).await {
                Ok(_) => {}
                Err(e) => match e.blast_radius() {
                    BlastRadius::Process => {
                        error!(reason = %reason, error = %e, "MergeCoordinator: unrecoverable merge failure");
                        return Err(e);
                    }
                    BlastRadius::Merge => {
                        error!(reason = %reason, error = %e, "MergeCoordinator: merge aborted");
                    }
                    BlastRadius::Transient => {
                        warn!(reason = %reason, error = %e, "MergeCoordinator: merge failed, waiting for next change");
                    }
                },
            }
        }
    }

    pub async fn merge_once(&self, reason: SourceKind) -> Result<MergeOutcome, DomainError> {
        info!(reason = %reason, "Merging to destination due to source change");
        let (local, remote) = self.store.snapshot().await?;
        self.merge.execute(local, remote).await
    }
}
