//! Canvas create and update workflows.
//!
//! Each submission runs one linear sequence of remote calls and ends in
//! exactly one notification:
//!
//! - create: `canvases.create` -> `canvases.access.set` -> notify
//! - update: `canvases.sections.lookup` -> `canvases.edit` -> notify
//!
//! The first failed call stops the sequence. Nothing is retried and nothing
//! is rolled back; a canvas whose access grant failed stays created.

use canvas_bot_core::{
    AccessLevel, CanvasId, CanvasSubmission, CreateSubmission, DocumentRef, EditChange,
    EditSubmission, SectionQuery, UserId,
};
use tracing::{error, info, instrument, warn};

use crate::canvas::{CanvasApi, CanvasError, CanvasOperation, find_section};
use crate::config::{CanvasConfig, WorkspaceConfig};
use crate::slack::{
    SlackError, build_created_message, build_failure_message, build_updated_message, canvas_url,
};

use super::Notifier;

/// Whether a workflow reached its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStatus {
    Success,
    Failure,
}

/// Message produced by a workflow run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub recipient: UserId,
    pub text: String,
    pub status: NotificationStatus,
}

impl Notification {
    fn success(recipient: &UserId, text: String) -> Self {
        Self {
            recipient: recipient.clone(),
            text,
            status: NotificationStatus::Success,
        }
    }

    fn failure(recipient: &UserId, text: String) -> Self {
        Self {
            recipient: recipient.clone(),
            text,
            status: NotificationStatus::Failure,
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.status, NotificationStatus::Success)
    }
}

/// Canvas created but not shared with the requested user.
struct AccessNotGranted {
    canvas_id: CanvasId,
    error: CanvasError,
}

enum CreateFailure {
    Create(CanvasError),
    Access(AccessNotGranted),
}

/// Runs canvas submissions against a [`CanvasApi`] and reports through a
/// [`Notifier`].
pub struct CanvasWorkflow<A, N> {
    api: A,
    notifier: N,
    workspace: WorkspaceConfig,
    canvas: CanvasConfig,
}

impl<A, N> CanvasWorkflow<A, N>
where
    A: CanvasApi,
    N: Notifier,
{
    #[must_use]
    pub const fn new(api: A, notifier: N, workspace: WorkspaceConfig, canvas: CanvasConfig) -> Self {
        Self {
            api,
            notifier,
            workspace,
            canvas,
        }
    }

    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }

    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Deep link for a canvas in this workspace.
    #[must_use]
    pub fn canvas_url(&self, canvas_id: &CanvasId) -> String {
        canvas_url(
            &self.workspace.host,
            &self.workspace.team_id,
            canvas_id.as_str(),
        )
    }

    /// Run a submission and deliver its notification.
    ///
    /// The returned notification is the one that was sent.
    ///
    /// # Errors
    ///
    /// Returns error only if the notification itself cannot be delivered.
    #[instrument(skip(self, submission), fields(recipient = %submission.recipient()))]
    pub async fn submit(&self, submission: CanvasSubmission) -> Result<Notification, SlackError> {
        let notification = self.run(&submission).await;

        if let Err(e) = self
            .notifier
            .notify(&notification.recipient, &notification.text)
            .await
        {
            error!(error = %e, "Failed to deliver canvas notification");
            return Err(e);
        }

        Ok(notification)
    }

    /// Run a submission without delivering the result.
    pub async fn run(&self, submission: &CanvasSubmission) -> Notification {
        match submission {
            CanvasSubmission::Create(create) => self.create_document(create).await,
            CanvasSubmission::Edit(edit) => self.update_document(edit).await,
        }
    }

    /// Create a canvas and grant the submitting user write access.
    #[instrument(skip(self, submission), fields(title = %submission.title))]
    pub async fn create_document(&self, submission: &CreateSubmission) -> Notification {
        match self.try_create(submission).await {
            Ok(DocumentRef { canvas_id }) => {
                let url = self.canvas_url(&canvas_id);
                info!(canvas_id = %canvas_id, "Canvas created");
                Notification::success(
                    &submission.user_id,
                    build_created_message(canvas_id.as_str(), &submission.title, &url),
                )
            }
            Err(CreateFailure::Create(e)) => {
                log_failure(&e);
                Notification::failure(&submission.user_id, failure_text(&e))
            }
            Err(CreateFailure::Access(AccessNotGranted { canvas_id, error })) => {
                log_failure(&error);
                let url = self.canvas_url(&canvas_id);
                Notification::failure(
                    &submission.user_id,
                    format!("{}\nurl: {url}", failure_text(&error)),
                )
            }
        }
    }

    async fn try_create(&self, submission: &CreateSubmission) -> Result<DocumentRef, CreateFailure> {
        let request = submission.to_request(&self.canvas.create_prefix);

        let outcome = self
            .api
            .create(&request)
            .await
            .map_err(|source| {
                CreateFailure::Create(CanvasError::Transport {
                    operation: CanvasOperation::Create,
                    source,
                })
            })?;

        let created = outcome
            .into_result()
            .map_err(|message| {
                CreateFailure::Create(CanvasError::Api {
                    operation: CanvasOperation::Create,
                    message,
                })
            })?
            .map(|id| DocumentRef {
                canvas_id: CanvasId::new(id),
            })
            .ok_or_else(|| CreateFailure::Create(CanvasError::MissingCanvasId))?;

        let users = [submission.user_id.clone()];
        let grant = match self
            .api
            .grant_access(&created.canvas_id, &users, AccessLevel::Write)
            .await
        {
            Ok(outcome) => outcome.into_result().map_err(|message| CanvasError::Api {
                operation: CanvasOperation::GrantAccess,
                message,
            }),
            Err(source) => Err(CanvasError::Transport {
                operation: CanvasOperation::GrantAccess,
                source,
            }),
        };

        match grant {
            Ok(_) => Ok(created),
            Err(error) => Err(CreateFailure::Access(AccessNotGranted {
                canvas_id: created.canvas_id,
                error,
            })),
        }
    }

    /// Insert content after the first section matching the configured text.
    #[instrument(skip(self, submission), fields(canvas_id = %submission.canvas_id))]
    pub async fn update_document(&self, submission: &EditSubmission) -> Notification {
        match self.try_update(submission).await {
            Ok(()) => {
                let url = self.canvas_url(&submission.canvas_id);
                info!("Canvas updated");
                Notification::success(
                    &submission.user_id,
                    build_updated_message(&submission.title, &url),
                )
            }
            Err(e) => {
                log_failure(&e);
                Notification::failure(&submission.user_id, failure_text(&e))
            }
        }
    }

    async fn try_update(&self, submission: &EditSubmission) -> Result<(), CanvasError> {
        let query = SectionQuery::new(submission.canvas_id.clone(), &self.canvas.section_match);
        let section = find_section(&self.api, &query).await?;

        let markdown = self.canvas.edit_content.markdown(&submission.content);
        let changes = [EditChange::insert_after(section.id, markdown)];

        self.api
            .edit(&submission.canvas_id, &changes)
            .await
            .map_err(|source| CanvasError::Transport {
                operation: CanvasOperation::Edit,
                source,
            })?
            .into_result()
            .map_err(|message| CanvasError::Api {
                operation: CanvasOperation::Edit,
                message,
            })?;

        Ok(())
    }
}

fn failure_text(error: &CanvasError) -> String {
    build_failure_message(error.operation().action(), &error.user_detail())
}

fn log_failure(error: &CanvasError) {
    match error {
        CanvasError::Transport { .. } => {
            error!(operation = %error.operation(), kind = ?error.kind(), error = %error, "Canvas call failed");
        }
        _ => {
            warn!(operation = %error.operation(), kind = ?error.kind(), error = %error, "Canvas workflow stopped");
        }
    }
}
