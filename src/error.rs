// src/error.rs
// =============================================================================
// Typed errors for the library side of the crate.
//
// The binary (main.rs) keeps using anyhow::Result at the edges, but the
// pipeline needs to tell its callers WHICH kind of failure happened:
// - a bad URL is the user's fault (HTTP 400, no network call made)
// - a failed homepage fetch ends the run (HTTP 500)
// - a failed subpage fetch is only logged and the page is dropped
//
// thiserror generates the Display and Error impls from the attributes.
// =============================================================================

use thiserror::Error;

/// Why a single page could not be fetched.
///
/// Callers treat this as "this page contributes nothing"; only the
/// homepage turns it into a fatal AuditError.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,
    #[error("HTTP {0}")]
    Status(u16),
    #[error("not an HTML page (content-type: {0})")]
    NotHtml(String),
    #[error("network error: {0}")]
    Network(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout
        } else if let Some(status) = error.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Network(error.to_string())
        }
    }
}

/// Failures that end an audit run.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Missing or malformed URL. Holds a message meant for the user.
    #[error("{0}")]
    InvalidUrl(String),

    #[error("could not fetch {url}: {source}")]
    HomepageFetch {
        url: String,
        #[source]
        source: FetchError,
    },

    /// The HTTP client itself could not be built
    #[error("failed to create HTTP client: {0}")]
    Client(String),
}

impl AuditError {
    /// True for errors caused by the request rather than by the server side
    pub fn is_client_error(&self) -> bool {
        matches!(self, AuditError::InvalidUrl(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = AuditError::HomepageFetch {
            url: "https://example.com/".to_string(),
            source: FetchError::Status(503),
        };
        assert_eq!(err.to_string(), "could not fetch https://example.com/: HTTP 503");
        assert!(!err.is_client_error());

        let err = AuditError::InvalidUrl("URL is required".to_string());
        assert_eq!(err.to_string(), "URL is required");
        assert!(err.is_client_error());
    }
}
