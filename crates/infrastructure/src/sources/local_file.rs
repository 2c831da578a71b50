use async_trait::async_trait;
use merge_dns_application::ports::RecordSource;
use merge_dns_domain::{DomainError, RecordSet};
use tracing::debug;

/// Records file produced on this host.
pub struct LocalFileSource {
    path: String,
}

impl LocalFileSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl RecordSource for LocalFileSource {
    async fn read(&self) -> Result<RecordSet, DomainError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| DomainError::Io {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        let records = RecordSet::from_json_slice(&bytes).map_err(|e| match e {
            DomainError::Decode(reason) => {
                DomainError::Decode(format!("local source `{}`: {}", self.path, reason))
            }
            other => other,
        })?;

        debug!(path = %self.path, version = records.version, entries = records.len(), "Read local records");
        Ok(records)
    }

    fn location(&self) -> &str {
        &self.path
    }
}
