//! Errors that abort a fetch run.
//!
//! Every variant is treated the same by the binary: log and skip. They are
//! kept distinct so the log line says what went wrong.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Network or transport failure
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-success HTTP status
    #[error("Failed to fetch {url}: {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Invalid base64 content: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Content is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure while handling one listing entry
    #[error("{entry}: {source}")]
    Entry {
        entry: String,
        #[source]
        source: Box<FetchError>,
    },

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    pub fn for_entry(self, entry: impl Into<String>) -> Self {
        FetchError::Entry {
            entry: entry.into(),
            source: Box::new(self),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FetchError::Io {
            path: path.into(),
            source,
        }
    }
}
