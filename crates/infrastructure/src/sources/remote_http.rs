use async_trait::async_trait;
use merge_dns_application::ports::RecordSource;
use merge_dns_domain::config::RemoteSourceConfig;
use merge_dns_domain::{DomainError, RecordSet};
use tracing::debug;

use crate::http::build_client;

#[derive(Clone)]
struct BasicAuthCredentials {
    username: String,
    password: String,
}

/// Records document served over HTTP(S).
pub struct RemoteHttpSource {
    url: String,
    client: reqwest::Client,
    basic_auth: Option<BasicAuthCredentials>,
}

impl RemoteHttpSource {
    pub fn new(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
            basic_auth: None,
        }
    }

    pub fn with_basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.basic_auth = Some(BasicAuthCredentials {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    /// Builds the client (TLS roots, redirect limit, timeout) and attaches
    /// credentials when basic auth is enabled.
    pub fn from_config(config: &RemoteSourceConfig) -> Result<Self, DomainError> {
        if config.endpoint.trim().is_empty() {
            return Err(DomainError::Config(
                "No endpoint for the remote source was given".to_string(),
            ));
        }

        let client = build_client(config)?;
        let source = Self::new(config.endpoint.trim(), client);

        Ok(match config.credentials() {
            Some((username, password)) => source.with_basic_auth(username, password),
            None => source,
        })
    }
}

#[async_trait]
impl RecordSource for RemoteHttpSource {
    async fn read(&self) -> Result<RecordSet, DomainError> {
        let mut request = self.client.get(&self.url);
        if let Some(auth) = &self.basic_auth {
            request = request.basic_auth(&auth.username, Some(&auth.password));
        }

        let response = request.send().await.map_err(|e| DomainError::Fetch {
            url: self.url.clone(),
            reason: e.to_string(),
        })?;

        let status = response.status();

        // The body is read in full on every status, error responses included.
        let body = response.bytes().await.map_err(|e| DomainError::Fetch {
            url: self.url.clone(),
            reason: format!("reading response body: {}", e),
        })?;

        if !status.is_success() {
            return Err(DomainError::HttpStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let records = RecordSet::from_json_slice(&body).map_err(|e| match e {
            DomainError::Decode(reason) => {
                DomainError::Decode(format!("remote source `{}`: {}", self.url, reason))
            }
            other => other,
        })?;

        debug!(
            url = %self.url,
            version = records.version,
            entries = records.len(),
            body_len = body.len(),
            "Fetched remote records"
        );
        Ok(records)
    }

    fn location(&self) -> &str {
        &self.url
    }
}
