use crate::snapshot_store::SnapshotHandle;
use merge_dns_application::use_cases::RefreshSourceUseCase;
use merge_dns_domain::{DomainError, SourceKind};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Re-reads one source on a fixed interval and signals version changes.
///
/// A failed read or filter is logged and the tick is skipped; the stored
/// snapshot and its version stay as they were. A fatal error cancels the
/// shared token and is returned from the task.
pub struct SourcePollJob {
    refresh: Arc<RefreshSourceUseCase>,
    store: SnapshotHandle,
    events: mpsc::Sender<SourceKind>,
    interval: Duration,
    shutdown: CancellationToken,
}

impl SourcePollJob {
    pub fn new(
        refresh: Arc<RefreshSourceUseCase>,
        store: SnapshotHandle,
        events: mpsc::Sender<SourceKind>,
    ) -> Self {
        Self {
            refresh,
            store,
            events,
            interval: Duration::from_secs(30),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval_secs(self, interval_secs: u64) -> Self {
        self.with_interval(Duration::from_secs(interval_secs))
    }

    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn source(&self) -> SourceKind {
        self.refresh.kind()
    }

    pub fn start(self: Arc<Self>) -> JoinHandle<Result<(), DomainError>> {
        let source = self.source();
        info!(
            source = %source,
            location = self.refresh.location(),
            interval_secs = self.interval.as_secs_f64(),
            "Starting source poll job"
        );

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(self.interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!(source = %source, "SourcePollJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        match self.poll_once().await {
                            Ok(true) => {
                                if self.events.send(source).await.is_err() {
                                    warn!(source = %source, "SourcePollJob: merge coordinator gone, stopping");
                                    break;
                                }
                            }
                            Ok(false) => {}
                            Err(e) if e.is_fatal() => {
                                error!(source = %source, error = %e, "SourcePollJob: stopping watch");
                                self.shutdown.cancel();
                                return Err(e);
                            }
                            Err(e) => {
                                error!(source = %source, error = %e, "SourcePollJob: refresh failed");
                            }
                        }
                    }
                }
            }

            Ok(())
        })
    }

    /// One tick: returns `true` when a new version was stored.
    pub async fn poll_once(&self) -> Result<bool, DomainError> {
        let source = self.source();
        let known = self.store.version(source).await?;

        let Some(records) = self.refresh.execute(Some(known)).await? else {
            return Ok(false);
        };

        let changed = self.store.offer(source, records).await?;
        debug!(source = %source, changed, "SourcePollJob: tick complete");
        Ok(changed)
    }
}
