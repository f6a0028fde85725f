//! Client error types.

use std::path::PathBuf;

/// Result type for Subskribe client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when using the Subskribe client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport failure: connect, timeout, or reading the response body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a status other than 200 or 201.
    #[error("http request failed status:{status} response:{body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Payload could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Local file for a multipart upload could not be opened or read.
    #[error("cannot read {}: {source}", .path.display())]
    File {
        /// The file that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A required response header was absent.
    #[error("could not find {0} in headers")]
    MissingHeader(&'static str),

    /// The `Location` header did not end in a usable identifier.
    #[error("could not find location key in: {0}")]
    InvalidLocation(String),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// HTTP status of an [`ClientError::Api`] error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the call failed because the configured timeout elapsed.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(err) if err.is_timeout())
    }
}
