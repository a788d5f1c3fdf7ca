//! Errors returned when a resource URI cannot be read.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResourceError {
    /// No registered template accepts the URI.
    #[error("Resource not found: {uri}")]
    NotFound { uri: String },

    /// The URI has no `scheme://` part.
    #[error("Invalid URI: {uri}")]
    InvalidUri { uri: String },
}

impl ResourceError {
    pub fn not_found(uri: &str) -> Self {
        Self::NotFound { uri: uri.to_owned() }
    }

    pub fn invalid_uri(uri: &str) -> Self {
        Self::InvalidUri { uri: uri.to_owned() }
    }
}
