//! Failure taxonomy for request execution.
//!
//! Every way a request can fail maps to exactly one [`ApiError`] variant,
//! classified at the pipeline step that observed it. A failure is always a
//! value the caller receives; nothing here panics or drops an error.

use thiserror::Error;

/// The outcome of a typed request: the decoded value, or a classified failure.
pub type Outcome<T> = Result<T, ApiError>;

/// Errors produced by the request execution pipeline.
///
/// Each variant corresponds to one distinguishable failure cause and carries
/// the diagnostics needed to explain it - the underlying transport or decode
/// error, the offending status code, or the rejected input string.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The exchange failed during send: DNS, connection, TLS, or timeout.
    #[error("network request failed: {0}")]
    Network(#[source] reqwest::Error),

    /// The server answered 200 with an empty body.
    #[error("response body was empty")]
    DataNotFound,

    /// The body was present but did not decode as the target type.
    #[error("JSON parse error: {0}")]
    JsonParsing(#[source] serde_json::Error),

    /// The server returned a status other than 200.
    #[error("unexpected HTTP status {0}")]
    InvalidStatusCode(u16),

    /// The input string is not a valid URL. Carries the original string.
    #[error("not a valid URL: {0}")]
    BadUrl(String),

    /// The exchange produced a status but died before the body was read.
    #[error("failed to read response body: {0}")]
    BadResponse(#[source] reqwest::Error),
}

impl ApiError {
    /// Returns the HTTP status code associated with this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::InvalidStatusCode(code) => Some(*code),
            Self::Network(e) | Self::BadResponse(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if the failure happened at the transport layer,
    /// before any body could be interpreted.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::BadResponse(_))
    }
}
