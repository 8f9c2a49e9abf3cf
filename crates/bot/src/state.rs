//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::BotConfig;
use crate::services::CanvasWorkflow;
use crate::slack::{SlackClient, SlackError};

/// Workflow wired to Slack for both canvas calls and notifications.
pub type SlackCanvasWorkflow = CanvasWorkflow<SlackClient, SlackClient>;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    slack: SlackClient,
    workflow: SlackCanvasWorkflow,
}

impl AppState {
    /// Build the Slack client and canvas workflow from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: &BotConfig) -> Result<Self, SlackError> {
        let slack = SlackClient::new(&config.slack)?;
        let workflow = CanvasWorkflow::new(
            slack.clone(),
            slack.clone(),
            config.workspace.clone(),
            config.canvas.clone(),
        );

        Ok(Self {
            inner: Arc::new(AppStateInner {
                slack,
                workflow,
            }),
        })
    }

    #[must_use]
    pub fn slack(&self) -> &SlackClient {
        &self.inner.slack
    }

    #[must_use]
    pub fn workflow(&self) -> &SlackCanvasWorkflow {
        &self.inner.workflow
    }
}
