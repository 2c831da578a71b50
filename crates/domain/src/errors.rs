use thiserror::Error;

/// How far an error reaches once it surfaces in watch mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlastRadius {
    /// Skip this poll tick or this merge attempt; keep watching.
    Transient,
    /// Abort the merge in progress; the destination is left untouched.
    Merge,
    /// Nothing can fix this without human intervention; stop the process.
    Process,
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Key lists were not the same: local keys {local:?}, remote keys {remote:?}")]
    SchemaMismatch {
        local: Vec<String>,
        remote: Vec<String>,
    },

    #[error("Record infos and records are not parallel: {infos} infos, {records} records")]
    ParallelismViolation { infos: usize, records: usize },

    #[error("Deployment name in record info {row} was not a string")]
    DeploymentNotString { row: usize },

    #[error("Invalid deployment pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Deployment `{deployment}` could not be matched against `{pattern}`: {reason}")]
    PatternMatch {
        pattern: String,
        deployment: String,
        reason: String,
    },

    #[error("Failed to decode records: {0}")]
    Decode(String),

    #[error("Failed to encode records: {0}")]
    Encode(String),

    #[error("I/O error on `{path}`: {reason}")]
    Io { path: String, reason: String },

    #[error("Request to `{url}` failed: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Non-2xx status code ({status}) received from `{url}`")]
    HttpStatus { status: u16, url: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Snapshot store is no longer running")]
    StoreClosed,
}

impl DomainError {
    pub fn blast_radius(&self) -> BlastRadius {
        match self {
            DomainError::SchemaMismatch { .. }
            | DomainError::InvalidPattern { .. }
            | DomainError::Config(_)
            | DomainError::StoreClosed => BlastRadius::Process,
            DomainError::ParallelismViolation { .. } | DomainError::Encode(_) => {
                BlastRadius::Merge
            }
            DomainError::DeploymentNotString { .. }
            | DomainError::PatternMatch { .. }
            | DomainError::Decode(_)
            | DomainError::Io { .. }
            | DomainError::Fetch { .. }
            | DomainError::HttpStatus { .. } => BlastRadius::Transient,
        }
    }

    pub fn is_fatal(&self) -> bool {
        self.blast_radius() == BlastRadius::Process
    }
}
