//! Configuration module for merge-dns
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration, logging level, file loading and CLI overrides
//! - `sources`: Local file and remote endpoint settings
//! - `destination`: Output file settings
//! - `errors`: Configuration errors

pub mod destination;
pub mod errors;
pub mod root;
pub mod sources;

pub use destination::DestinationConfig;
pub use errors::ConfigError;
pub use root::{CliOverrides, Config, LoggingConfig, DEFAULT_CONFIG_PATH};
pub use sources::{BasicAuthConfig, LocalSourceConfig, MatchSpec, RemoteSourceConfig};
