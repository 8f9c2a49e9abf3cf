//! Wire bodies for the Slack canvases API.

use canvas_bot_core::{
    AccessLevel, CanvasId, DocumentContent, EditChange, OperationOutcome, SectionCriteria,
    SectionRef, UserId,
};
use serde::{Deserialize, Serialize};

/// Body of `canvases.create`.
#[derive(Debug, Serialize)]
pub struct CreateCanvasBody<'a> {
    pub title: &'a str,
    pub document_content: DocumentContent,
}

/// Body of `canvases.access.set`.
#[derive(Debug, Serialize)]
pub struct AccessSetBody<'a> {
    pub canvas_id: &'a CanvasId,
    pub access_level: AccessLevel,
    pub user_ids: &'a [UserId],
}

/// Body of `canvases.sections.lookup`.
#[derive(Debug, Serialize)]
pub struct SectionsLookupBody<'a> {
    pub canvas_id: &'a CanvasId,
    pub criteria: SectionCriteria,
}

/// Body of `canvases.edit`.
#[derive(Debug, Serialize)]
pub struct EditCanvasBody<'a> {
    pub canvas_id: &'a CanvasId,
    pub changes: &'a [EditChange],
}

/// Reply shared by every canvases method.
#[derive(Debug, Clone, Deserialize)]
pub struct CanvasResponse {
    /// Whether the request was successful.
    pub ok: bool,
    /// Error code if not ok.
    #[serde(default)]
    pub error: Option<String>,
    /// Created canvas (`canvases.create` only).
    #[serde(default)]
    pub canvas_id: Option<String>,
    /// Matching sections in document order (`canvases.sections.lookup` only).
    #[serde(default)]
    pub sections: Vec<SectionRef>,
}

impl CanvasResponse {
    /// Outcome of the call, without the section list.
    #[must_use]
    pub fn outcome(&self) -> OperationOutcome {
        if self.ok {
            OperationOutcome::ok(self.canvas_id.clone())
        } else {
            OperationOutcome {
                success: false,
                error_message: self.error.clone(),
                result_id: None,
            }
        }
    }
}
