//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (connect, timeout, decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service declined the request with a non-2xx status
    #[error("{status}: {}", .detail.as_deref().unwrap_or("request rejected"))]
    Rejected {
        status: reqwest::StatusCode,
        detail: Option<String>,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Human-readable message for surfacing in the UI.
    ///
    /// Prefers the service's `detail` field when one was attached; falls
    /// back to a generic message otherwise.
    pub fn message(&self) -> String {
        match self {
            ClientError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ClientError::Rejected { detail: None, .. } => "Reservation failed".to_string(),
            other => other.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
