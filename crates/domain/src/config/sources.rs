use serde::{Deserialize, Serialize};

pub const DEFAULT_SCRAPE_INTERVAL_SECS: u64 = 30;
pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 30;

/// The locally produced records file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocalSourceConfig {
    #[serde(default)]
    pub file: String,

    /// Seconds between re-reads (default: 30)
    #[serde(default = "default_scrape_interval")]
    pub scrape_interval: u64,
}

impl Default for LocalSourceConfig {
    fn default() -> Self {
        Self {
            file: String::new(),
            scrape_interval: default_scrape_interval(),
        }
    }
}

/// The remotely served records endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RemoteSourceConfig {
    #[serde(default)]
    pub endpoint: String,

    /// Disable TLS certificate verification
    #[serde(default)]
    pub insecure_skip_verify: bool,

    /// PEM bundle trusted instead of the system roots
    #[serde(default)]
    pub ca_certs: Option<String>,

    #[serde(default)]
    pub basic_auth: BasicAuthConfig,

    /// Seconds between fetches (default: 30)
    #[serde(default = "default_scrape_interval")]
    pub scrape_interval: u64,

    /// Per-request timeout in seconds (default: 30)
    #[serde(default = "default_remote_timeout")]
    pub timeout: u64,

    #[serde(default)]
    pub include: MatchSpec,
}

impl Default for RemoteSourceConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            insecure_skip_verify: false,
            ca_certs: None,
            basic_auth: BasicAuthConfig::default(),
            scrape_interval: default_scrape_interval(),
            timeout: default_remote_timeout(),
            include: MatchSpec::default(),
        }
    }
}

impl RemoteSourceConfig {
    /// Credentials to attach to each request, if enabled.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        if self.basic_auth.enabled {
            Some((&self.basic_auth.username, &self.basic_auth.password))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BasicAuthConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Include rules for remote entries.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MatchSpec {
    /// Regular expressions matched against each entry's deployment name
    #[serde(default)]
    pub deployments: Vec<String>,
}

fn default_scrape_interval() -> u64 {
    DEFAULT_SCRAPE_INTERVAL_SECS
}

fn default_remote_timeout() -> u64 {
    DEFAULT_REMOTE_TIMEOUT_SECS
}
