//! Adapters behind the application ports: the local records file, the remote
//! HTTP endpoint and the destination file.
pub mod destination;
pub mod http;
pub mod sources;

pub use destination::FileDestination;
pub use http::build_client;
pub use sources::{LocalFileSource, RemoteHttpSource};
