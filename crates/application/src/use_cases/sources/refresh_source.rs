use crate::ports::RecordSource;
use merge_dns_domain::{DeploymentFilter, DomainError, RecordSet, SourceKind};
use std::sync::Arc;
use tracing::debug;

/// Use case: re-read one source and prepare it for merging.
///
/// The remote source carries the include filter; the local one does not.
pub struct RefreshSourceUseCase {
    kind: SourceKind,
    source: Arc<dyn RecordSource>,
    filter: Option<Arc<DeploymentFilter>>,
}

impl RefreshSourceUseCase {
    pub fn new(kind: SourceKind, source: Arc<dyn RecordSource>) -> Self {
        Self {
            kind,
            source,
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: Arc<DeploymentFilter>) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    pub fn location(&self) -> &str {
        self.source.location()
    }

    /// Reads the source and returns the filtered snapshot.
    ///
    /// When `known_version` matches the version just read, `Ok(None)` is
    /// returned and the filter is not run.
    pub async fn execute(&self, known_version: Option<u64>) -> Result<Option<RecordSet>, DomainError> {
        let records = self.source.read().await?;

        if known_version == Some(records.version) {
            debug!(source = %self.kind, version = records.version, "Source version unchanged");
            return Ok(None);
        }

        let records = match &self.filter {
            Some(filter) => {
                let before = records.len();
                let filtered = filter.apply(records)?;
                debug!(
                    source = %self.kind,
                    kept = filtered.len(),
                    dropped = before - filtered.len(),
                    "Applied include rules"
                );
                filtered
            }
            None => records,
        };

        Ok(Some(records))
    }
}
