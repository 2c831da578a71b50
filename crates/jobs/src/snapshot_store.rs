use merge_dns_domain::{DomainError, RecordSet, SourceKind};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

const COMMAND_QUEUE_CAPACITY: usize = 16;

enum Command {
    Version {
        source: SourceKind,
        reply: oneshot::Sender<u64>,
    },
    Offer {
        source: SourceKind,
        records: RecordSet,
        reply: oneshot::Sender<bool>,
    },
    Snapshot {
        reply: oneshot::Sender<(RecordSet, RecordSet)>,
    },
}

/// Owner of the live local and remote snapshots.
///
/// Runs as a single task; every read and replacement goes through its command
/// queue, so the coordinator always sees a consistent pair and never a
/// remote snapshot that has not been filtered yet.
pub struct SnapshotStore {
    local: RecordSet,
    remote: RecordSet,
    commands: mpsc::Receiver<Command>,
}

/// Cloneable handle used by poll jobs and the merge coordinator.
#[derive(Clone)]
pub struct SnapshotHandle {
    commands: mpsc::Sender<Command>,
}

impl SnapshotStore {
    /// Spawns the owning task seeded with the initial snapshots. The task ends
    /// once every handle has been dropped.
    pub fn spawn(local: RecordSet, remote: RecordSet) -> SnapshotHandle {
        let (tx, rx) = mpsc::channel(COMMAND_QUEUE_CAPACITY);
        let store = Self {
            local,
            remote,
            commands: rx,
        };
        tokio::spawn(store.run());
        SnapshotHandle { commands: tx }
    }

    async fn run(mut self) {
        debug!(
            local_version = self.local.version,
            remote_version = self.remote.version,
            "Snapshot store started"
        );

        while let Some(command) = self.commands.recv().await {
            match command {
                Command::Version { source, reply } => {
                    let _ = reply.send(self.slot(source).version);
                }
                Command::Offer {
                    source,
                    records,
                    reply,
                } => {
                    let changed = self.offer(source, records);
                    let _ = reply.send(changed);
                }
                Command::Snapshot { reply } => {
                    let _ = reply.send((self.local.clone(), self.remote.clone()));
                }
            }
        }

        debug!("Snapshot store stopped");
    }

    fn slot(&self, source: SourceKind) -> &RecordSet {
        match source {
            SourceKind::Local => &self.local,
            SourceKind::Remote => &self.remote,
        }
    }

    fn offer(&mut self, source: SourceKind, records: RecordSet) -> bool {
        let slot = match source {
            SourceKind::Local => &mut self.local,
            SourceKind::Remote => &mut self.remote,
        };

        if slot.version == records.version {
            return false;
        }

        info!(
            source = %source,
            old_version = slot.version,
            new_version = records.version,
            "Source version change found"
        );
        *slot = records;
        true
    }
}

impl SnapshotHandle {
    /// Last-known version of `source`.
    pub async fn version(&self, source: SourceKind) -> Result<u64, DomainError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Version { source, reply }).await?;
        rx.await.map_err(|_| DomainError::StoreClosed)
    }

    /// Replaces the `source` snapshot when `records` carries a different
    /// version. Returns whether anything changed.
    pub async fn offer(&self, source: SourceKind, records: RecordSet) -> Result<bool, DomainError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Offer {
            source,
            records,
            reply,
        })
        .await?;
        rx.await.map_err(|_| DomainError::StoreClosed)
    }

    /// Copies of the current `(local, remote)` pair.
    pub async fn snapshot(&self) -> Result<(RecordSet, RecordSet), DomainError> {
        let (reply, rx) = oneshot::channel();
        self.send(Command::Snapshot { reply }).await?;
        rx.await.map_err(|_| DomainError::StoreClosed)
    }

    async fn send(&self, command: Command) -> Result<(), DomainError> {
        self.commands
            .send(command)
            .await
            .map_err(|_| DomainError::StoreClosed)
    }
}
