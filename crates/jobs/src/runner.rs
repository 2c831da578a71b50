use crate::{MergeCoordinator, SnapshotHandle, SourcePollJob};
use merge_dns_application::use_cases::{MergeAndWriteUseCase, RefreshSourceUseCase};
use merge_dns_domain::{DomainError, SourceKind};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Change events in flight between the poll jobs and the coordinator.
const EVENT_QUEUE_CAPACITY: usize = 1;

/// Wires the two poll jobs and the merge coordinator together.
///
/// # Example
///
/// ```rust,ignore
/// let watch = JobRunner::new(store, merge)
///     .with_local_source(local_refresh, Duration::from_secs(30))
///     .with_remote_source(remote_refresh, Duration::from_secs(30))
///     .with_cancellation(token)
///     .start();
/// watch.wait().await?;
/// ```
pub struct JobRunner {
    store: SnapshotHandle,
    merge: Arc<MergeAndWriteUseCase>,
    sources: Vec<(Arc<RefreshSourceUseCase>, Duration)>,
    shutdown: CancellationToken,
}

/// Running watch pipeline.
pub struct WatchHandle {
    coordinator: JoinHandle<Result<(), DomainError>>,
    pollers: Vec<JoinHandle<Result<(), DomainError>>>,
    shutdown: CancellationToken,
}

impl JobRunner {
    pub fn new(store: SnapshotHandle, merge: Arc<MergeAndWriteUseCase>) -> Self {
        Self {
            store,
            merge,
            sources: Vec::with_capacity(2),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_local_source(self, refresh: Arc<RefreshSourceUseCase>, interval: Duration) -> Self {
        debug_assert_eq!(refresh.kind(), SourceKind::Local);
        self.with_source(refresh, interval)
    }

    pub fn with_remote_source(self, refresh: Arc<RefreshSourceUseCase>, interval: Duration) -> Self {
        debug_assert_eq!(refresh.kind(), SourceKind::Remote);
        self.with_source(refresh, interval)
    }

    fn with_source(mut self, refresh: Arc<RefreshSourceUseCase>, interval: Duration) -> Self {
        self.sources.push((refresh, interval));
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Start all registered jobs.
    pub fn start(self) -> WatchHandle {
        info!("Starting watch of local and remote sources");

        let (events_tx, events_rx) = mpsc::channel(EVENT_QUEUE_CAPACITY);

        let pollers = self
            .sources
            .into_iter()
            .map(|(refresh, interval)| {
                let job = SourcePollJob::new(refresh, self.store.clone(), events_tx.clone())
                    .with_interval(interval)
                    .with_cancellation(self.shutdown.clone());
                Arc::new(job).start()
            })
            .collect();
        drop(events_tx);

        let coordinator = MergeCoordinator::new(self.store, self.merge, events_rx)
            .with_cancellation(self.shutdown.clone());
        let coordinator = tokio::spawn(coordinator.run());

        info!("All watch jobs started");

        WatchHandle {
            coordinator,
            pollers,
            shutdown: self.shutdown,
        }
    }
}

impl WatchHandle {
    /// Waits for the coordinator to finish, then stops the poll jobs.
    ///
    /// A poll job that hits a fatal error cancels the whole watch; its error
    /// is returned when the coordinator itself finished cleanly.
    pub async fn wait(self) -> Result<(), DomainError> {
        let mut result = match self.coordinator.await {
            Ok(result) => result,
            Err(e) => Err(DomainError::Config(format!("merge coordinator task failed: {}", e))),
        };

        self.shutdown.cancel();
        for poller in self.pollers {
            let polled = match poller.await {
                Ok(polled) => polled,
                Err(e) => Err(DomainError::Config(format!("source poll task failed: {}", e))),
            };
            if result.is_ok() {
                result = polled;
            }
        }

        result
    }
}
