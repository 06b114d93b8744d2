//! Error taxonomy and HTTP mapping.
//!
//! # Responsibilities
//! - Define every failure the request path can surface
//! - Map each failure to its status code and JSON body at one boundary
//!
//! # Design Decisions
//! - Guard rejections render the short `{"error": ...}` body
//! - Upstream failures render the `{success, error, timestamp}` envelope
//! - Upstream status codes are carried as u16 to avoid pinning the
//!   outbound client's http types to the server's

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::util::now_epoch_secs;

/// Everything the request path can fail with.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Invalid input")]
    InvalidInput,

    #[error("API timeout")]
    UpstreamTimeout,

    #[error("API connection error: {0}")]
    UpstreamConnection(String),

    /// Upstream answered with a non-200 status, which is propagated.
    #[error("API error: {0}")]
    UpstreamStatus(u16),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Endpoint not found")]
    NotFound,
}

impl ProxyError {
    /// Status code this error is surfaced with.
    pub fn status(&self) -> StatusCode {
        match self {
            ProxyError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ProxyError::InvalidInput => StatusCode::BAD_REQUEST,
            ProxyError::UpstreamTimeout => StatusCode::GATEWAY_TIMEOUT,
            ProxyError::UpstreamConnection(_) => StatusCode::BAD_GATEWAY,
            ProxyError::UpstreamStatus(code) => {
                StatusCode::from_u16(*code).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ProxyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Upstream outcomes carry the timestamped envelope; guard and routing
    /// rejections keep the short body.
    fn is_upstream_outcome(&self) -> bool {
        matches!(
            self,
            ProxyError::UpstreamTimeout
                | ProxyError::UpstreamConnection(_)
                | ProxyError::UpstreamStatus(_)
                | ProxyError::Internal(_)
        )
    }
}

/// JSON wrapper for non-2xx upstream outcomes.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub success: bool,
    pub error: String,
    pub timestamp: f64,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.to_string();

        if self.is_upstream_outcome() {
            let envelope = ErrorEnvelope {
                success: false,
                error: message,
                timestamp: now_epoch_secs(),
            };
            (status, Json(envelope)).into_response()
        } else {
            (status, Json(serde_json::json!({ "error": message }))).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ProxyError::RateLimited.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(ProxyError::InvalidInput.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ProxyError::UpstreamTimeout.status(), StatusCode::GATEWAY_TIMEOUT);
        assert_eq!(
            ProxyError::UpstreamConnection("refused".into()).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(ProxyError::NotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_upstream_status_propagates_code() {
        assert_eq!(
            ProxyError::UpstreamStatus(503).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        // Unrepresentable codes degrade to 502 rather than panicking
        assert_eq!(ProxyError::UpstreamStatus(99).status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_error_strings_match_wire_format() {
        assert_eq!(ProxyError::RateLimited.to_string(), "Rate limit exceeded");
        assert_eq!(ProxyError::InvalidInput.to_string(), "Invalid input");
        assert_eq!(ProxyError::UpstreamTimeout.to_string(), "API timeout");
        assert_eq!(ProxyError::UpstreamStatus(503).to_string(), "API error: 503");
        assert_eq!(ProxyError::NotFound.to_string(), "Endpoint not found");
    }
}
