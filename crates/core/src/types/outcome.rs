//! Outcome of a single remote canvas operation.

use serde::{Deserialize, Serialize};

/// Error string used when Slack reports `ok: false` without an `error` field.
pub const UNKNOWN_ERROR: &str = "unknown_error";

/// Success or failure of one remote call, as reported by the service.
///
/// Transport failures never produce an outcome; they are surfaced as
/// errors by the client before a response body exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Identifier produced by the call (the canvas ID for `canvases.create`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_id: Option<String>,
}

impl OperationOutcome {
    /// Successful outcome with an optional result ID.
    #[must_use]
    pub const fn ok(result_id: Option<String>) -> Self {
        Self {
            success: true,
            error_message: None,
            result_id,
        }
    }

    /// Failed outcome carrying the service's error string.
    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error_message: Some(error.into()),
            result_id: None,
        }
    }

    /// Error message, falling back to [`UNKNOWN_ERROR`] for failures without one.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        if self.success {
            None
        } else {
            Some(self.error_message.as_deref().unwrap_or(UNKNOWN_ERROR))
        }
    }

    /// Convert into a `Result` over the result ID.
    ///
    /// # Errors
    ///
    /// Returns the service's error string if the call failed.
    pub fn into_result(self) -> Result<Option<String>, String> {
        if self.success {
            Ok(self.result_id)
        } else {
            Err(self
                .error_message
                .unwrap_or_else(|| UNKNOWN_ERROR.to_string()))
        }
    }
}
