//! Validated modal submissions.
//!
//! The bot's modal forms are parsed into these types before any remote call
//! is made, so the workflow never reads raw form state.

use super::canvas::DocumentCreateRequest;
use super::id::{CanvasId, UserId};

/// Submission of the create-canvas form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateSubmission {
    /// User picked in the form; receives access and the outcome message.
    pub user_id: UserId,
    pub title: String,
    pub content: String,
}

impl CreateSubmission {
    /// Build the create request, prefixing the body with `body_prefix`.
    #[must_use]
    pub fn to_request(&self, body_prefix: &str) -> DocumentCreateRequest {
        DocumentCreateRequest::new(
            self.title.clone(),
            self.user_id.clone(),
            format!("{body_prefix}{}", self.content),
        )
    }
}

/// Submission of the edit-canvas form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSubmission {
    /// User picked in the form; receives the outcome message.
    pub user_id: UserId,
    pub canvas_id: CanvasId,
    pub title: String,
    pub content: String,
}

/// A submission of either form, tagged by mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasSubmission {
    Create(CreateSubmission),
    Edit(EditSubmission),
}

impl CanvasSubmission {
    /// User the outcome notification is delivered to.
    #[must_use]
    pub const fn recipient(&self) -> &UserId {
        match self {
            Self::Create(submission) => &submission.user_id,
            Self::Edit(submission) => &submission.user_id,
        }
    }

    /// Title typed in the form.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Create(submission) => &submission.title,
            Self::Edit(submission) => &submission.title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_prefixes_body() {
        let submission = CreateSubmission {
            user_id: UserId::new("U1"),
            title: "Plan".to_string(),
            content: "hello".to_string(),
        };

        let request = submission.to_request("> standalone canvas!");
        assert_eq!(request.title, "Plan");
        assert_eq!(request.owner_id, UserId::new("U1"));
        assert_eq!(request.body_markdown, "> standalone canvas!hello");
    }

    #[test]
    fn test_recipient_is_selected_user() {
        let submission = CanvasSubmission::Edit(EditSubmission {
            user_id: UserId::new("U9"),
            canvas_id: CanvasId::new("F1"),
            title: "Notes".to_string(),
            content: String::new(),
        });

        assert_eq!(submission.recipient().as_str(), "U9");
        assert_eq!(submission.title(), "Notes");
    }
}
