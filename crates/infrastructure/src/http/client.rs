use merge_dns_domain::config::RemoteSourceConfig;
use merge_dns_domain::DomainError;
use reqwest::redirect::Policy;
use std::time::Duration;
use tracing::{debug, warn};

use super::tls::parse_root_certificates;

/// Redirects followed before a fetch is abandoned.
pub const MAX_REDIRECTS: usize = 10;

const USER_AGENT: &str = concat!("merge-dns/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the remote records endpoint.
///
/// A configured CA bundle replaces the built-in roots entirely; otherwise the
/// system trust store is used.
pub fn build_client(config: &RemoteSourceConfig) -> Result<reqwest::Client, DomainError> {
    let mut builder = reqwest::Client::builder()
        .use_rustls_tls()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(config.timeout))
        .redirect(Policy::limited(MAX_REDIRECTS));

    if let Some(pem) = config.ca_certs.as_deref().filter(|pem| !pem.trim().is_empty()) {
        let certs = parse_root_certificates(pem)?;
        debug!(count = certs.len(), "Using custom CA certificates for remote source");
        builder = builder.tls_built_in_root_certs(false);
        for cert in certs {
            builder = builder.add_root_certificate(cert);
        }
    }

    if config.insecure_skip_verify {
        warn!(endpoint = %config.endpoint, "TLS certificate verification disabled for remote source");
        builder = builder.danger_accept_invalid_certs(true);
    }

    builder
        .build()
        .map_err(|e| DomainError::Config(format!("Failed to build HTTP client: {}", e)))
}
