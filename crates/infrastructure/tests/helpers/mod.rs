pub mod remote_server;

pub use remote_server::*;
