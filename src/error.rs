// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Io Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Request Error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Json Error: {0}")]
    Json(#[from] serde_json::Error),

    /// Non-success status from the job API. `body` is the raw response text.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Job response carries no id: {0}")]
    MissingJobId(String),

    #[error("Invalid location file {}: {reason}", path.display())]
    Location { path: PathBuf, reason: String },

    #[error("Invalid selection: {0}")]
    Selection(String),

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("{0}")]
    Usage(String),

    #[error("Input closed before an answer was given")]
    InputClosed,
}
