use thiserror::Error;

/// Errors raised by the fallible edges of the crate: config loading,
/// timestamp parsing and command-line handling. The labelling, search and
/// scan functions themselves never fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid axis config: {0}")]
    InvalidConfig(String),

    #[error("cannot parse timestamp: {0:?}")]
    UnparsableTimestamp(String),

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, Error>;
