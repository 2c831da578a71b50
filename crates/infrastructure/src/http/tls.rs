use merge_dns_domain::DomainError;
use rustls::pki_types::CertificateDer;
use std::io::{BufReader, Cursor};

/// Parses every certificate in a PEM bundle. A bundle without a single
/// certificate is a configuration error.
pub fn parse_root_certificates(pem: &str) -> Result<Vec<reqwest::Certificate>, DomainError> {
    let mut reader = BufReader::new(Cursor::new(pem.as_bytes()));
    let certs: Vec<CertificateDer<'static>> = rustls_pemfile::certs(&mut reader)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| DomainError::Config(format!("Failed to parse CA certificates: {}", e)))?;

    if certs.is_empty() {
        return Err(DomainError::Config(
            "CA certs were specified for remote, but could not parse any certificates".to_string(),
        ));
    }

    certs
        .iter()
        .map(|der| {
            reqwest::Certificate::from_der(der.as_ref())
                .map_err(|e| DomainError::Config(format!("Invalid CA certificate: {}", e)))
        })
        .collect()
}
