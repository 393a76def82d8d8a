//! Error types for pagekit
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! The paging state machine itself never fails; every error originates at
//! the fetch boundary. Backend failures are carried verbatim inside
//! [`ApiFailure`] so callers can surface exactly what the server said.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ============================================================================
// Failure Body
// ============================================================================

/// Body of a failed backend response
///
/// List backends answer errors with either a plain text message or a JSON
/// object carrying an `errors` array. Both shapes decode into one union
/// so rendering is a single `match` instead of a runtime type probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FailureBody {
    /// Structured validation failure: `{"errors": ["...", "..."]}`
    Errors {
        /// Individual error messages, in response order
        errors: Vec<String>,
    },
    /// Plain text message
    Message(String),
}

impl FailureBody {
    /// Decode a raw response body
    ///
    /// Parses JSON when the body is JSON in one of the known shapes,
    /// otherwise keeps the text as-is.
    pub fn from_raw(raw: &str) -> Self {
        serde_json::from_str::<Self>(raw).unwrap_or_else(|_| Self::Message(raw.to_string()))
    }

    /// Whether the body carries no usable message
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Message(message) => message.is_empty(),
            Self::Errors { errors } => errors.iter().all(String::is_empty),
        }
    }
}

impl fmt::Display for FailureBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(message) => f.write_str(message),
            Self::Errors { errors } => f.write_str(&errors.join("; ")),
        }
    }
}

impl From<String> for FailureBody {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

impl From<&str> for FailureBody {
    fn from(message: &str) -> Self {
        Self::Message(message.to_string())
    }
}

// ============================================================================
// API Failure
// ============================================================================

/// A failed response from a list backend, carried verbatim
///
/// Holds the HTTP status line plus the decoded [`FailureBody`]. The
/// `Display` impl renders the one-line form callers show to users:
/// `HTTP 404 (Not Found): zone does not exist`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiFailure {
    /// HTTP status code
    pub status: u16,
    /// HTTP status text, e.g. "Not Found"
    pub status_text: String,
    /// Decoded response body
    pub body: FailureBody,
}

impl ApiFailure {
    /// Create a failure from its parts
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<FailureBody>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    /// Create a failure from a raw, undecoded response body
    pub fn from_raw_body(status: u16, status_text: impl Into<String>, raw: &str) -> Self {
        Self::new(status, status_text, FailureBody::from_raw(raw))
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.body.is_empty() {
            write!(f, "HTTP {} ({})", self.status, self.status_text)
        } else {
            write!(f, "HTTP {} ({}): {}", self.status, self.status_text, self.body)
        }
    }
}

impl std::error::Error for ApiFailure {}

// ============================================================================
// Crate Error
// ============================================================================

/// The main error type for pagekit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Backend Errors
    // ============================================================================
    /// The backend answered a fetch with an error response
    #[error(transparent)]
    Api(#[from] ApiFailure),

    // ============================================================================
    // Fetch Errors
    // ============================================================================
    /// A page source failed before getting an answer from the backend
    #[error("Fetch failed: {message}")]
    Fetch {
        /// What went wrong
        message: String,
    },

    /// A continuation cursor the source could not act on
    #[error("Unusable cursor '{cursor}': {message}")]
    BadCursor {
        /// The offending cursor
        cursor: String,
        /// Why the source rejected it
        message: String,
    },

    // ============================================================================
    // Serialization Errors
    // ============================================================================
    /// A wire payload failed to decode
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Anything that does not fit the categories above
    #[error("{0}")]
    Other(String),

    /// Wrapped error from application code
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create an API failure with a plain text body
    pub fn api(status: u16, status_text: impl Into<String>, body: impl Into<FailureBody>) -> Self {
        Self::Api(ApiFailure::new(status, status_text, body))
    }

    /// Create a fetch error
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Create a bad cursor error
    pub fn bad_cursor(cursor: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BadCursor {
            cursor: cursor.into(),
            message: message.into(),
        }
    }

    /// The backend failure inside this error, if that is what it is
    pub fn as_api_failure(&self) -> Option<&ApiFailure> {
        match self {
            Self::Api(failure) => Some(failure),
            _ => None,
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api(failure) => is_retryable_status(failure.status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

/// Result type alias for pagekit
pub type Result<T> = std::result::Result<T, Error>;
