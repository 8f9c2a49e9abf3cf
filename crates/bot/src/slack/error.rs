//! Slack-related errors.

use thiserror::Error;

/// Errors that can occur when interacting with Slack.
#[derive(Debug, Error)]
pub enum SlackError {
    /// HTTP request failed before a response arrived.
    #[error("Slack request failed: {0}")]
    Request(String),

    /// Request exceeded the configured timeout.
    #[error("Slack request timed out: {0}")]
    Timeout(String),

    /// Failed to parse response.
    #[error("Slack response error: {0}")]
    Response(String),

    /// Slack API returned an error.
    #[error("Slack API error: {0}")]
    Api(String),

    /// Invalid webhook signature.
    #[error("Invalid Slack signature: {0}")]
    InvalidSignature(String),

    /// Failed to parse a slash command or interaction payload.
    #[error("Invalid interaction payload: {0}")]
    InvalidPayload(String),

    /// Configuration error.
    #[error("Slack configuration error: {0}")]
    Config(String),
}

impl SlackError {
    /// Classify a `reqwest` send error.
    pub(crate) fn from_send(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error.to_string())
        } else {
            Self::Request(error.to_string())
        }
    }

    /// Classify a `reqwest` body decoding error.
    pub(crate) fn from_body(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout(error.to_string())
        } else {
            Self::Response(error.to_string())
        }
    }
}
