//! Resource-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use crate::canvas::CanvasError;

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The requested resource was not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// The resource URI is invalid.
    #[error("Invalid URI: {0}")]
    InvalidUri(String),

    /// The Canvas request behind the resource failed.
    #[error(transparent)]
    Upstream(#[from] CanvasError),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResourceError {
    /// Create a new "not found" error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }

    /// Create a new "invalid URI" error.
    pub fn invalid_uri(uri: impl Into<String>) -> Self {
        Self::InvalidUri(uri.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<ResourceError> for McpError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound(_) | ResourceError::InvalidUri(_) => {
                McpError::resource_not_found(err.to_string(), None)
            }
            ResourceError::Upstream(_) | ResourceError::Internal(_) => {
                McpError::internal_error(err.to_string(), None)
            }
        }
    }
}
