//! Error handling for the stats API module

use thiserror::Error;

/// Coarse failure taxonomy. Both kinds surface as the same error view.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum FailureKind {
    /// The request never produced an HTTP response.
    Network,
    /// The backend answered, but not with a usable payload.
    Response,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Network error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// The body could not be parsed as the expected JSON shape.
    #[error("Decoding error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The body parsed but its counters contradict each other.
    #[error("Inconsistent payload: {0}")]
    Inconsistent(String),
}

impl ApiError {
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Http { status, message }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            // Body read/decoding failures from reqwest still mean a response arrived.
            ApiError::Reqwest(e) if e.is_decode() || e.is_body() => FailureKind::Response,
            ApiError::Reqwest(_) => FailureKind::Network,
            ApiError::Http { .. } | ApiError::Decode(_) | ApiError::Inconsistent(_) => {
                FailureKind::Response
            }
        }
    }

    /// Short message suitable for the error view.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Reqwest(e) if e.is_connect() => {
                "Could not connect to the signal backend".to_string()
            }
            ApiError::Reqwest(e) if e.is_timeout() => "Request to the backend timed out".to_string(),
            ApiError::Reqwest(_) => "Network error while loading dashboard data".to_string(),
            ApiError::Http { status, .. } => {
                format!("Failed to load dashboard data (HTTP {})", status)
            }
            ApiError::Decode(_) => "Backend returned malformed dashboard data".to_string(),
            ApiError::Inconsistent(detail) => {
                format!("Backend returned inconsistent statistics: {}", detail)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_is_response_failure() {
        let err = ApiError::Http {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.kind(), FailureKind::Response);
        assert_eq!(err.user_message(), "Failed to load dashboard data (HTTP 500)");
    }

    #[test]
    fn test_decode_error_is_response_failure() {
        let err: ApiError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert_eq!(err.kind(), FailureKind::Response);
        assert!(!err.user_message().is_empty());
    }

    #[test]
    fn test_inconsistent_message_carries_detail() {
        let err = ApiError::Inconsistent("pending exceeds total".to_string());
        assert!(err.user_message().contains("pending exceeds total"));
    }
}
