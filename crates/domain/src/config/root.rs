use super::{ConfigError, DestinationConfig, LocalSourceConfig, RemoteSourceConfig};
use crate::errors::DomainError;
use crate::record_set::DeploymentFilter;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "merge-dns.toml";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Main configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub local_source: LocalSourceConfig,

    #[serde(default)]
    pub remote_source: RemoteSourceConfig,

    #[serde(default)]
    pub destination: DestinationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// `[logging]`: an `EnvFilter` directive such as `"debug"` or
/// `"merge_dns_jobs=debug,info"`. `RUST_LOG` takes precedence at startup.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Values given on the command line that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
}

impl Config {
    /// Reads and parses the TOML file at `path`, then applies `overrides`.
    ///
    /// The file must exist; every section inside it is optional.
    pub fn load(path: impl AsRef<Path>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let mut config = Self::from_toml_str(&content, &path.display().to_string())?;
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Checks everything needed for a merge before any I/O is attempted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.destination.file.trim().is_empty() {
            return Err(ConfigError::MissingDestination);
        }

        if self.local_source.file.trim().is_empty() {
            return Err(ConfigError::MissingLocalFile);
        }

        let endpoint = self.remote_source.endpoint.trim();
        if endpoint.is_empty() {
            return Err(ConfigError::MissingEndpoint);
        }
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(ConfigError::InvalidEndpoint(endpoint.to_string()));
        }

        if self.local_source.scrape_interval == 0 {
            return Err(ConfigError::ZeroInterval("local"));
        }
        if self.remote_source.scrape_interval == 0 {
            return Err(ConfigError::ZeroInterval("remote"));
        }

        let auth = &self.remote_source.basic_auth;
        if auth.enabled && auth.username.is_empty() {
            return Err(ConfigError::MissingUsername);
        }

        self.deployment_filter()?;

        Ok(())
    }

    /// Compiles the remote include rules.
    pub fn deployment_filter(&self) -> Result<DeploymentFilter, ConfigError> {
        DeploymentFilter::new(self.remote_source.include.deployments.as_slice()).map_err(|e| match e {
            DomainError::InvalidPattern { pattern, reason } => {
                ConfigError::InvalidPattern { pattern, reason }
            }
            other => ConfigError::InvalidPattern {
                pattern: self.remote_source.include.deployments.join(", "),
                reason: other.to_string(),
            },
        })
    }
}
