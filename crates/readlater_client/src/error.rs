use std::fmt;

use thiserror::Error;

/// Terminal failure of a save-article operation.
///
/// Delivered to the caller through the same channel as the success value and
/// never retried internally. `description` in `Unknown` is for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveArticleError {
    #[error("not authorized to save articles")]
    Unauthorized,
    #[error("the server rejected the request data")]
    BadData,
    #[error("unknown error: {description}")]
    Unknown { description: String },
}

impl SaveArticleError {
    pub fn unknown(description: impl Into<String>) -> Self {
        SaveArticleError::Unknown {
            description: description.into(),
        }
    }
}

impl From<TransportError> for SaveArticleError {
    fn from(err: TransportError) -> Self {
        SaveArticleError::unknown(err.to_string())
    }
}

/// Failure reported by the GraphQL transport before any payload was decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct TransportError {
    pub kind: TransportFailure,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportFailure, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    InvalidEndpoint,
    InvalidHeader,
    Timeout,
    Network,
    HttpStatus(u16),
    Decode,
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportFailure::InvalidEndpoint => write!(f, "invalid endpoint"),
            TransportFailure::InvalidHeader => write!(f, "invalid header"),
            TransportFailure::Timeout => write!(f, "timeout"),
            TransportFailure::Network => write!(f, "network error"),
            TransportFailure::HttpStatus(code) => write!(f, "http status {code}"),
            TransportFailure::Decode => write!(f, "undecodable response"),
        }
    }
}
