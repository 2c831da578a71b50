use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't read config file `{path}`: {reason}")]
    FileRead { path: String, reason: String },

    #[error("Couldn't parse config file `{path}`: {reason}")]
    Parse { path: String, reason: String },

    #[error("No destination file path was given")]
    MissingDestination,

    #[error("No local source file path was given")]
    MissingLocalFile,

    #[error("No endpoint for the remote source was given")]
    MissingEndpoint,

    #[error("Remote endpoint `{0}` must start with http:// or https://")]
    InvalidEndpoint(String),

    #[error("Scrape interval for the {0} source must be greater than zero")]
    ZeroInterval(&'static str),

    #[error("Basic auth is enabled for the remote source but no username was given")]
    MissingUsername,

    #[error("Invalid deployment pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: String },
}
