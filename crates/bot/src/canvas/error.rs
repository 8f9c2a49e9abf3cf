//! Canvas workflow errors.

use std::fmt;

use canvas_bot_core::CanvasId;
use thiserror::Error;

use crate::slack::SlackError;

/// Remote canvas operation a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasOperation {
    Create,
    GrantAccess,
    LookupSections,
    Edit,
}

impl CanvasOperation {
    /// Slack Web API method name.
    #[must_use]
    pub const fn method(self) -> &'static str {
        match self {
            Self::Create => "canvases.create",
            Self::GrantAccess => "canvases.access.set",
            Self::LookupSections => "canvases.sections.lookup",
            Self::Edit => "canvases.edit",
        }
    }

    /// Phrase used in user-facing failure messages ("Failed to ...").
    #[must_use]
    pub const fn action(self) -> &'static str {
        match self {
            Self::Create => "create canvas",
            Self::GrantAccess => "set canvas access",
            Self::LookupSections => "look up canvas sections",
            Self::Edit => "update canvas",
        }
    }
}

impl fmt::Display for CanvasOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method())
    }
}

/// Broad class of a [`CanvasError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Slack was unreachable, too slow, or replied with something unreadable.
    Transport,
    /// Slack replied `ok: false`.
    Application,
    /// Slack replied successfully but the workflow cannot continue.
    Logic,
}

/// Errors that stop a canvas workflow.
#[derive(Debug, Error)]
pub enum CanvasError {
    /// The request never produced a usable reply.
    #[error("{operation} transport failure: {source}")]
    Transport {
        operation: CanvasOperation,
        #[source]
        source: SlackError,
    },

    /// Slack rejected the request.
    #[error("{operation} failed: {message}")]
    Api {
        operation: CanvasOperation,
        message: String,
    },

    /// Section lookup returned no sections.
    #[error("no section of canvas {canvas_id} contains \"{criteria}\"")]
    SectionNotFound { canvas_id: CanvasId, criteria: String },

    /// `canvases.create` reported success without a canvas ID.
    #[error("canvases.create returned no canvas_id")]
    MissingCanvasId,
}

impl CanvasError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } => ErrorKind::Transport,
            Self::Api { .. } => ErrorKind::Application,
            Self::SectionNotFound { .. } | Self::MissingCanvasId => ErrorKind::Logic,
        }
    }

    /// Operation that failed.
    #[must_use]
    pub const fn operation(&self) -> CanvasOperation {
        match self {
            Self::Transport { operation, .. } | Self::Api { operation, .. } => *operation,
            Self::SectionNotFound { .. } => CanvasOperation::LookupSections,
            Self::MissingCanvasId => CanvasOperation::Create,
        }
    }

    /// Detail shown to the user after "Failed to <action>: ".
    #[must_use]
    pub fn user_detail(&self) -> String {
        match self {
            Self::Transport { source, .. } => source.to_string(),
            Self::Api { message, .. } => message.clone(),
            Self::SectionNotFound { criteria, .. } => {
                format!("no section contains \"{criteria}\"")
            }
            Self::MissingCanvasId => "Slack returned no canvas ID".to_string(),
        }
    }
}
