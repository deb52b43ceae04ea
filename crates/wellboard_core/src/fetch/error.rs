//! Fetch error taxonomy.
//!
//! Every variant is recoverable: the controller answers all of them with
//! the screen's fallback dataset. There is no fatal class.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure modes of one page fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure (connection refused, DNS, TLS, ...).
    Network(String),
    /// Server answered with a non-2xx status.
    Status(u16),
    /// Body decoded but its shape is not a recognized page payload.
    MalformedPayload(String),
    /// Request exceeded the configured deadline.
    Timeout,
}

impl Display for FetchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network(detail) => write!(f, "network failure: {detail}"),
            Self::Status(code) => write!(f, "server returned status {code}"),
            Self::MalformedPayload(detail) => write!(f, "unrecognized page payload: {detail}"),
            Self::Timeout => write!(f, "request timed out"),
        }
    }
}

impl Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            return Self::Timeout;
        }
        if let Some(status) = value.status() {
            return Self::Status(status.as_u16());
        }
        if value.is_decode() {
            return Self::MalformedPayload(value.to_string());
        }
        Self::Network(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::FetchError;

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(
            FetchError::Status(503).to_string(),
            "server returned status 503"
        );
        assert_eq!(FetchError::Timeout.to_string(), "request timed out");
        assert!(FetchError::Network("connection refused".to_string())
            .to_string()
            .contains("connection refused"));
    }
}
