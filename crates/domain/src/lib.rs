//! merge-dns domain layer
//!
//! Record sets, the append-union merge, the deployment filter and the
//! configuration model shared by every other crate in the workspace.
pub mod config;
pub mod errors;
pub mod record_set;
pub mod source;

pub use config::{CliOverrides, Config, ConfigError, DEFAULT_CONFIG_PATH};
pub use errors::{BlastRadius, DomainError};
pub use record_set::{AliasDefinition, DeploymentFilter, InfoValue, RecordPair, RecordSet};
pub use source::SourceKind;
