use thiserror::Error;

/// Errors surfaced by the query client and its configuration
#[derive(Error, Debug)]
pub enum AskError {
    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    RequestError(#[from] reqwest::Error),

    #[error(transparent)]
    SerdeError(#[from] serde_json::Error),

    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Result type for query operations
pub type AskResult<T> = Result<T, AskError>;
