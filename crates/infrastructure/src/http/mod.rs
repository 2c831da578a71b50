pub mod client;
pub mod tls;

pub use client::{build_client, MAX_REDIRECTS};
pub use tls::parse_root_certificates;
