//! Versioned DNS record snapshots and the operations applied to them.
//!
//! The wire format is the `records.json` document consumed by the resolver:
//! `record_keys`, `record_infos`, `aliases`, `version` and `records`.
//! `record_infos[i]` and `records[i]` always describe the same entry.

pub mod filter;
pub mod merge;
pub mod model;

pub use filter::{DeploymentFilter, DEPLOYMENT_KEY};
pub use model::{AliasDefinition, InfoValue, RecordPair, RecordSet};
