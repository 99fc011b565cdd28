use rekognition_model::{ServiceError, ServiceErrorCode};
use thiserror::Error as ThisError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure reported by a `Transport` before any response was received.
#[derive(Debug, ThisError)]
pub enum TransportError {
    #[error("connect failed: {0}")]
    Connect(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("transport error: {0}")]
    Other(String),
}

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("timeout")]
    Timeout,
    /// The service rejected the request with a typed error body.
    #[error("{operation} failed with {code} (HTTP {status}): {message}")]
    Service {
        operation: &'static str,
        status: u16,
        code: ServiceErrorCode,
        message: String,
    },
    /// A non-success response whose body is not a service error.
    #[error("{operation} failed with HTTP {status}")]
    UnexpectedResponse {
        operation: &'static str,
        status: u16,
        body: String,
    },
    #[error("failed to decode {operation} response: {source}")]
    Decode {
        operation: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    pub(crate) fn service(operation: &'static str, status: u16, err: ServiceError) -> Self {
        Error::Service {
            operation,
            status,
            code: err.code,
            message: err.message,
        }
    }

    /// The service error code, if the service answered with one.
    pub fn code(&self) -> Option<&ServiceErrorCode> {
        match self {
            Error::Service { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Whether resending the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Service { code, .. } => code.is_retryable(),
            Error::UnexpectedResponse { status, .. } => *status >= 500,
            Error::Timeout | Error::Transport(_) => true,
            _ => false,
        }
    }
}
