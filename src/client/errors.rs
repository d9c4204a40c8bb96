//! Error types for search-service calls
//!
//! Two failure classes exist on this boundary: the request did not complete
//! successfully (transport), or it completed but the payload does not have
//! the promised shape (parse). Callers that only need an opaque failure
//! signal can ignore the distinction; callers that log can use the
//! classification helpers.

use thiserror::Error;

/// Result type alias for search-service calls
pub type ClientResult<T> = Result<T, ClientError>;

/// Error types for search-service calls
#[derive(Debug, Error)]
pub enum ClientError {
    /// The service answered with a non-success HTTP status
    #[error("search service returned HTTP {status} from {endpoint}")]
    Status { endpoint: &'static str, status: u16 },

    /// The request never completed: connection, timeout, or body transfer failure
    #[error("request to search service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success payload that does not match the expected shape
    #[error("malformed payload from search service: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ClientError {
    /// Transport-class failure: the service never delivered a usable payload.
    /// Non-success statuses count as transport failures, including not-found.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Status { .. } | ClientError::Transport(_))
    }

    /// Parse-class failure: the payload arrived but could not be decoded
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(self, ClientError::Parse(_))
    }

    /// HTTP status carried by the failure, if the service answered at all
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            ClientError::Transport(e) => e.status().map(|s| s.as_u16()),
            ClientError::Parse(_) => None,
        }
    }
}
