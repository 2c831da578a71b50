use async_trait::async_trait;
use merge_dns_application::ports::RecordDestination;
use merge_dns_domain::{DomainError, RecordSet};
use std::io::ErrorKind;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Merged records file read by the resolver.
///
/// Only the merge coordinator writes it. Each write truncates the file and
/// replaces its contents with one `write_all`.
pub struct FileDestination {
    path: String,
}

impl FileDestination {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    fn io_error(&self, action: &str, e: std::io::Error) -> DomainError {
        DomainError::Io {
            path: self.path.clone(),
            reason: format!("{}: {}", action, e),
        }
    }
}

#[async_trait]
impl RecordDestination for FileDestination {
    async fn current_version(&self) -> Result<u64, DomainError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(self.io_error("reading destination", e)),
        };

        if bytes.is_empty() {
            return Ok(0);
        }

        let current = RecordSet::from_json_slice(&bytes).map_err(|e| match e {
            DomainError::Decode(reason) => DomainError::Decode(format!(
                "current destination `{}`: {}",
                self.path, reason
            )),
            other => other,
        })?;
        Ok(current.version)
    }

    async fn write(&self, records: &RecordSet) -> Result<(), DomainError> {
        let contents = records.to_json_vec()?;

        let mut options = tokio::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o640);

        let mut file = options
            .open(&self.path)
            .await
            .map_err(|e| self.io_error("opening destination", e))?;
        file.write_all(&contents)
            .await
            .map_err(|e| self.io_error("writing destination", e))?;
        file.flush()
            .await
            .map_err(|e| self.io_error("flushing destination", e))?;

        debug!(path = %self.path, bytes = contents.len(), version = records.version, "Wrote destination");
        Ok(())
    }

    fn location(&self) -> &str {
        &self.path
    }
}
