use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedbackError {
    #[error("unknown form field '{0}'")]
    InvalidField(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to {operation} {}: {source}", path.display())]
    StorageError {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("relay rejected the submission with status {status}: {detail}")]
    RelayStatus {
        status: http::StatusCode,
        detail: String,
    },

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, FeedbackError>;
