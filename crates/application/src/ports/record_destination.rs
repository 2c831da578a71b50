use async_trait::async_trait;
use merge_dns_domain::{DomainError, RecordSet};

/// The merged artifact consumed by the resolver.
#[async_trait]
pub trait RecordDestination: Send + Sync {
    /// Version of the artifact currently persisted, `0` if there is none yet
    /// or it is empty.
    async fn current_version(&self) -> Result<u64, DomainError>;

    /// Replaces the whole artifact with `records`.
    async fn write(&self, records: &RecordSet) -> Result<(), DomainError>;

    fn location(&self) -> &str;
}
