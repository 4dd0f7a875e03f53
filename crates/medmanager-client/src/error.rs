//! Error taxonomy for API calls.

use thiserror::Error;

use crate::transport::TransportError;

/// Errors surfaced by the MedManager API client.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The caller supplied arguments that never reach the network,
    /// e.g. fewer than two distinct drug ids for an interaction check.
    #[error("invalid argument: {detail}")]
    InvalidArgument {
        /// What was wrong with the arguments.
        detail: String,
    },

    /// An interaction check could not be completed: the backend returned
    /// a non-success status or the request failed outright.
    #[error("interaction check failed: {}", .message.as_deref().unwrap_or("request could not be completed"))]
    InteractionCheckFailed {
        /// HTTP status, when a response was received.
        status: Option<u16>,
        /// Structured server message, when one was provided.
        message: Option<String>,
    },

    /// A drug search request failed. Callers at the search boundary are
    /// expected to degrade to an empty result list instead of surfacing
    /// this to the end user.
    #[error("drug search failed: {message}")]
    SearchFailed {
        /// What went wrong.
        message: String,
    },

    /// The backend answered with a non-success status.
    #[error("server returned status {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Status {
        /// HTTP status code.
        status: u16,
        /// Structured server message, when one was provided.
        message: Option<String>,
    },

    /// The request could not be completed (connect failure, timeout).
    #[error("network error: {message}")]
    Network {
        /// What went wrong.
        message: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("invalid response payload: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Returns true for a 401 status response.
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::Status { status: 401, .. }
                | Self::InteractionCheckFailed { status: Some(401), .. }
        )
    }

    /// HTTP status carried by this error, when any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::InteractionCheckFailed { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<TransportError> for ApiError {
    fn from(error: TransportError) -> Self {
        Self::Network {
            message: error.to_string(),
        }
    }
}

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessor() {
        let error = ApiError::Status {
            status: 500,
            message: Some("boom".to_string()),
        };
        assert_eq!(error.status(), Some(500));
        assert!(!error.is_unauthorized());

        let error = ApiError::Status {
            status: 401,
            message: None,
        };
        assert!(error.is_unauthorized());
    }

    #[test]
    fn test_display_without_message() {
        let error = ApiError::InteractionCheckFailed {
            status: None,
            message: None,
        };
        assert_eq!(
            error.to_string(),
            "interaction check failed: request could not be completed"
        );

        let error = ApiError::Status {
            status: 404,
            message: None,
        };
        assert_eq!(error.to_string(), "server returned status 404");
    }
}
