/*
[INPUT]:  Error sources (key parsing, HTTP transport, service replies, signing)
[OUTPUT]: Structured error types with service and status context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

use crate::types::ChallengeService;

/// Main error type for the MEMO auth adapter
#[derive(Error, Debug)]
pub enum MemoAuthError {
    /// Private key is not a valid secp256k1 scalar
    #[error("Invalid private key: {0}")]
    InvalidKey(String),

    /// Transport-level failure (timeout, DNS, connection refused)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered, but not with a usable challenge
    #[error("{service} challenge request failed{}: {detail}", status_suffix(.status))]
    ChallengeFetch {
        service: ChallengeService,
        status: Option<u16>,
        detail: String,
    },

    /// Signer fault while producing a signature
    #[error("Signing failed: {0}")]
    Signing(String),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (status {code})"),
        None => String::new(),
    }
}

impl MemoAuthError {
    /// Check if the error came from the transport rather than a service reply
    pub fn is_network(&self) -> bool {
        matches!(self, MemoAuthError::Network(_))
    }

    /// HTTP status attached to a fetch error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            MemoAuthError::ChallengeFetch { status, .. } => *status,
            MemoAuthError::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Create a fetch error from a non-success HTTP status and its raw body
    pub fn status_error(
        service: ChallengeService,
        status: StatusCode,
        body: impl Into<String>,
    ) -> Self {
        MemoAuthError::ChallengeFetch {
            service,
            status: Some(status.as_u16()),
            detail: body.into(),
        }
    }

    /// Create a fetch error for a reply that arrived but could not be used
    pub fn malformed(service: ChallengeService, detail: impl Into<String>) -> Self {
        MemoAuthError::ChallengeFetch {
            service,
            status: None,
            detail: detail.into(),
        }
    }
}

/// Result type alias for MEMO auth operations
pub type Result<T> = std::result::Result<T, MemoAuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_creation() {
        let err = MemoAuthError::status_error(
            ChallengeService::Middleware,
            StatusCode::INTERNAL_SERVER_ERROR,
            "internal error",
        );
        match &err {
            MemoAuthError::ChallengeFetch {
                service,
                status,
                detail,
            } => {
                assert_eq!(*service, ChallengeService::Middleware);
                assert_eq!(*status, Some(500));
                assert_eq!(detail, "internal error");
            }
            _ => panic!("Expected ChallengeFetch error variant"),
        }
        assert_eq!(err.status(), Some(500));
        assert!(!err.is_network());
    }

    #[test]
    fn test_error_display() {
        let err = MemoAuthError::status_error(
            ChallengeService::Middleware,
            StatusCode::BAD_REQUEST,
            "bad address",
        );
        assert_eq!(
            err.to_string(),
            "middleware challenge request failed (status 400): bad address"
        );

        let err = MemoAuthError::malformed(ChallengeService::Lens, "missing challenge");
        assert_eq!(err.to_string(), "lens challenge request failed: missing challenge");
        assert_eq!(err.status(), None);
    }
}
