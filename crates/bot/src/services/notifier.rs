//! Notification sink.

use std::future::Future;

use canvas_bot_core::UserId;
use tracing::instrument;

use crate::slack::{SlackClient, SlackError};

/// Delivers a text message to a user.
pub trait Notifier: Send + Sync {
    /// Send `text` to `recipient`.
    fn notify(
        &self,
        recipient: &UserId,
        text: &str,
    ) -> impl Future<Output = Result<(), SlackError>> + Send;
}

impl Notifier for SlackClient {
    /// Posting to a user ID delivers a direct message from the bot.
    #[instrument(skip(self, text), fields(recipient = %recipient))]
    async fn notify(&self, recipient: &UserId, text: &str) -> Result<(), SlackError> {
        self.post_text(recipient.as_str(), text).await?;
        Ok(())
    }
}
