//! Error taxonomy for content retrieval.
//!
//! Accessors never surface these to page code; they are logged and collapsed
//! to `None` / empty collections. The `try_*` accessors return them as-is.

use thiserror::Error;

/// Why a CMS request did not yield content.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentFetchError {
    /// HTTP 404: the content is legitimately absent (e.g. not yet published).
    #[error("content not found")]
    NotFound,

    /// The CMS answered with a non-2xx, non-404 status.
    #[error("CMS request failed ({status} {name}): {message}")]
    Upstream {
        status: u16,
        name: String,
        message: String,
    },

    /// The request never produced an HTTP response.
    #[error("network failure: {0}")]
    Network(String),

    /// The CMS answered 2xx but the body was not a JSON envelope.
    #[error("invalid CMS response: {0}")]
    Parse(String),
}

impl ContentFetchError {
    /// Short event tag used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentFetchError::NotFound => "not_found",
            ContentFetchError::Upstream { .. } => "upstream_error",
            ContentFetchError::Network(_) => "network_error",
            ContentFetchError::Parse(_) => "parse_error",
        }
    }

    /// Whether the content is simply absent rather than broken.
    pub fn is_absent(&self) -> bool {
        matches!(
            self,
            ContentFetchError::NotFound | ContentFetchError::Network(_)
        )
    }
}
