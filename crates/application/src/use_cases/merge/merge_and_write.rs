use crate::ports::RecordDestination;
use merge_dns_domain::{DomainError, RecordSet};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeOutcome {
    pub version: u64,
    pub entries: usize,
    pub aliases: usize,
}

/// Use case: merge two snapshots and replace the destination artifact.
///
/// The version written is whatever the destination currently holds (0 when it
/// does not exist yet); it is not incremented.
pub struct MergeAndWriteUseCase {
    destination: Arc<dyn RecordDestination>,
}

impl MergeAndWriteUseCase {
    pub fn new(destination: Arc<dyn RecordDestination>) -> Self {
        Self { destination }
    }

    pub fn location(&self) -> &str {
        self.destination.location()
    }

    pub async fn execute(&self, local: RecordSet, remote: RecordSet) -> Result<MergeOutcome, DomainError> {
        let version = self.destination.current_version().await?;
        debug!(version, destination = self.destination.location(), "Read destination version");

        let merged = RecordSet::merge(local, remote, version)?;
        let outcome = MergeOutcome {
            version: merged.version,
            entries: merged.len(),
            aliases: merged.aliases.len(),
        };

        self.destination.write(&merged).await?;

        info!(
            version = outcome.version,
            entries = outcome.entries,
            aliases = outcome.aliases,
            destination = self.destination.location(),
            "Merged records written"
        );
        Ok(outcome)
    }
}
