use async_trait::async_trait;
use merge_dns_domain::{DomainError, RecordSet};

/// A place a [`RecordSet`] snapshot can be (re-)read from.
///
/// Implementations perform exactly one read or fetch per call and never
/// retry; failures are reported to the caller, which decides whether the
/// error is transient.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn read(&self) -> Result<RecordSet, DomainError>;

    /// Human-readable location (path or URL) used in logs and errors.
    fn location(&self) -> &str;
}
