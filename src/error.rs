// Error types for orgscope.
// Separates lookup failures in JSON payloads from failures of the HTTP fetcher.

use thiserror::Error;

/// Failure raised by a [`JsonFetcher`](crate::github::JsonFetcher).
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("Key not found: {0:?}")]
    KeyNotFound(String),

    #[error("Unexpected value for {key:?}: expected {expected}")]
    UnexpectedType { key: String, expected: &'static str },

    #[error("Fetch failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The key named by a `KeyNotFound` error.
    pub fn missing_key(&self) -> Option<&str> {
        match self {
            Error::KeyNotFound(key) => Some(key.as_str()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
