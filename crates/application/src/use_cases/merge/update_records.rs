use super::{MergeAndWriteUseCase, MergeOutcome};
use crate::use_cases::RefreshSourceUseCase;
use merge_dns_domain::{DomainError, RecordSet};
use std::sync::Arc;
use tracing::info;

/// Snapshots used by a full update, returned so watch mode can seed its state.
#[derive(Debug, Clone)]
pub struct UpdateReport {
    pub local: RecordSet,
    pub remote: RecordSet,
    pub outcome: MergeOutcome,
}

/// Use case: read both sources, filter remote, merge and write, once.
pub struct UpdateRecordsUseCase {
    local: Arc<RefreshSourceUseCase>,
    remote: Arc<RefreshSourceUseCase>,
    merge: Arc<MergeAndWriteUseCase>,
}

impl UpdateRecordsUseCase {
    pub fn new(
        local: Arc<RefreshSourceUseCase>,
        remote: Arc<RefreshSourceUseCase>,
        merge: Arc<MergeAndWriteUseCase>,
    ) -> Self {
        Self {
            local,
            remote,
            merge,
        }
    }

    pub async fn execute(&self) -> Result<UpdateReport, DomainError> {
        let local = self.read(&self.local).await?;
        let remote = self.read(&self.remote).await?;

        info!(
            local_version = local.version,
            remote_version = remote.version,
            "Read local and remote records"
        );

        let outcome = self.merge.execute(local.clone(), remote.clone()).await?;

        Ok(UpdateReport {
            local,
            remote,
            outcome,
        })
    }

    async fn read(&self, source: &RefreshSourceUseCase) -> Result<RecordSet, DomainError> {
        source
            .execute(None)
            .await?
            .ok_or_else(|| DomainError::Decode(format!("no records read from `{}`", source.location())))
    }
}
