use thiserror::Error;

/// Failures surfaced by the remote name catalog.
///
/// Both transport and decode failures are rendered identically by views;
/// the distinction is kept for logging.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    /// The server answered with a non-success status.
    #[error("API error: {text}")]
    Request {
        status: u16,
        text: String,
    },
    /// The server could not be reached at all.
    #[error("transport error: {0}")]
    Transport(String),
    /// The response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Request { status: 404, .. })
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("persistent storage is unavailable")]
    Unavailable,
    #[error("failed to read key `{key}`: {reason}")]
    Read {
        key: String,
        reason: String,
    },
    #[error("failed to write key `{key}`: {reason}")]
    Write {
        key: String,
        reason: String,
    },
    #[error("malformed value under key `{key}`: {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
