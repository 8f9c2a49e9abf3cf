//! Canvas request types.
//!
//! These mirror the request bodies of the Slack canvases API
//! (`canvases.create`, `canvases.access.set`, `canvases.sections.lookup`,
//! `canvases.edit`). Field names serialize to the wire names Slack expects.
//!
//! See: <https://api.slack.com/methods/canvases.edit>

use serde::{Deserialize, Serialize};

use super::id::{CanvasId, SectionId, UserId};

/// Markdown body of a canvas or of a single change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentContent {
    #[serde(rename = "type")]
    pub content_type: String,
    pub markdown: String,
}

impl DocumentContent {
    /// Create a markdown content object.
    #[must_use]
    pub fn markdown(markdown: impl Into<String>) -> Self {
        Self {
            content_type: "markdown".to_string(),
            markdown: markdown.into(),
        }
    }
}

/// Request to create a new standalone canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentCreateRequest {
    /// Canvas title.
    pub title: String,
    /// User who receives access to the canvas and the outcome message.
    ///
    /// Not sent to `canvases.create`; the bot owns the created canvas and
    /// grants this user access afterwards.
    pub owner_id: UserId,
    /// Markdown body.
    pub body_markdown: String,
}

impl DocumentCreateRequest {
    /// Build a create request.
    #[must_use]
    pub fn new(title: impl Into<String>, owner_id: UserId, body_markdown: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            owner_id,
            body_markdown: body_markdown.into(),
        }
    }

    /// Body content in wire form.
    #[must_use]
    pub fn document_content(&self) -> DocumentContent {
        DocumentContent::markdown(self.body_markdown.clone())
    }
}

/// Reference to a canvas returned by `canvases.create`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    pub canvas_id: CanvasId,
}

/// Access level granted by `canvases.access.set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    Read,
    #[default]
    Write,
}

impl AccessLevel {
    /// Wire name of the access level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "read",
            Self::Write => "write",
        }
    }
}

/// Section lookup criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionCriteria {
    pub contains_text: String,
}

/// Query for the sections of a canvas containing some text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionQuery {
    pub canvas_id: CanvasId,
    pub contains_text: String,
}

impl SectionQuery {
    #[must_use]
    pub fn new(canvas_id: CanvasId, contains_text: impl Into<String>) -> Self {
        Self {
            canvas_id,
            contains_text: contains_text.into(),
        }
    }

    /// Criteria in wire form.
    #[must_use]
    pub fn criteria(&self) -> SectionCriteria {
        SectionCriteria {
            contains_text: self.contains_text.clone(),
        }
    }
}

/// A section returned by `canvases.sections.lookup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRef {
    pub id: SectionId,
}

/// Operation applied by a single canvas change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditOperation {
    InsertAfter,
    InsertBefore,
    InsertAtStart,
    InsertAtEnd,
    Replace,
    Delete,
}

impl EditOperation {
    /// Whether Slack requires a `section_id` for this operation.
    #[must_use]
    pub const fn requires_section(self) -> bool {
        matches!(
            self,
            Self::InsertAfter | Self::InsertBefore | Self::Delete
        )
    }
}

/// One change in a `canvases.edit` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditChange {
    pub operation: EditOperation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_id: Option<SectionId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_content: Option<DocumentContent>,
}

impl EditChange {
    /// Insert markdown after the given section.
    #[must_use]
    pub fn insert_after(section_id: SectionId, markdown: impl Into<String>) -> Self {
        Self {
            operation: EditOperation::InsertAfter,
            section_id: Some(section_id),
            document_content: Some(DocumentContent::markdown(markdown)),
        }
    }

    /// Section targeted by this change, if any.
    #[must_use]
    pub const fn target(&self) -> Option<&SectionId> {
        self.section_id.as_ref()
    }
}
