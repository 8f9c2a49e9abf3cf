//! HTTP error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::slack::SlackError;

/// Error returned by request handlers.
#[derive(Debug, Error)]
pub enum AppError {
    /// A Slack Web API call made while handling the request failed.
    #[error("Slack error: {0}")]
    Slack(#[from] SlackError),

    /// Request signature is missing, stale or wrong.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request from Slack.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if matches!(self, Self::Slack(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request failed"
            );
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }

        let status = match &self {
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Slack(_) => StatusCode::BAD_GATEWAY,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Internal(_) => "Internal server error".to_string(),
            Self::Slack(_) => "External service error".to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            status(AppError::Unauthorized("bad signature".to_string())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status(AppError::BadRequest("no payload".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status(SlackError::Api("invalid_auth".to_string()).into()),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status(AppError::Internal("boom".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }
}
