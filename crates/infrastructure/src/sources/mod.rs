pub mod local_file;
pub mod remote_http;

pub use local_file::LocalFileSource;
pub use remote_http::RemoteHttpSource;
