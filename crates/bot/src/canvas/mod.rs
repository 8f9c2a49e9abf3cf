//! Slack canvases API access.
//!
//! The [`CanvasApi`] trait is the seam between the canvas workflow and
//! Slack. [`SlackClient`](crate::slack::SlackClient) implements it against
//! the Web API; tests substitute in-memory implementations.
//!
//! # Methods
//!
//! - `canvases.create` - create a standalone canvas
//! - `canvases.access.set` - grant users access to a canvas
//! - `canvases.sections.lookup` - find sections containing some text
//! - `canvases.edit` - apply changes to a canvas
//!
//! Every method returns `Ok` with an [`OperationOutcome`] whenever Slack
//! replied with JSON, including `ok: false` replies. `Err` is reserved for
//! transport failures.

mod client;
mod error;
mod resolver;
mod types;

pub use error::{CanvasError, CanvasOperation, ErrorKind};
pub use resolver::find_section;
pub use types::{AccessSetBody, CanvasResponse, CreateCanvasBody, EditCanvasBody, SectionsLookupBody};

use std::future::Future;

use canvas_bot_core::{
    AccessLevel, CanvasId, DocumentCreateRequest, EditChange, OperationOutcome, SectionQuery,
    SectionRef, UserId,
};

use crate::slack::SlackError;

/// Reply to a section lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionLookup {
    pub outcome: OperationOutcome,
    /// Matching sections in the order Slack returned them.
    pub sections: Vec<SectionRef>,
}

/// Remote canvas operations.
pub trait CanvasApi: Send + Sync {
    /// Create a canvas. On success the outcome's `result_id` is the canvas ID.
    fn create(
        &self,
        request: &DocumentCreateRequest,
    ) -> impl Future<Output = Result<OperationOutcome, SlackError>> + Send;

    /// Grant users access to a canvas.
    fn grant_access(
        &self,
        canvas_id: &CanvasId,
        user_ids: &[UserId],
        level: AccessLevel,
    ) -> impl Future<Output = Result<OperationOutcome, SlackError>> + Send;

    /// Find the sections of a canvas matching a query.
    fn lookup_sections(
        &self,
        query: &SectionQuery,
    ) -> impl Future<Output = Result<SectionLookup, SlackError>> + Send;

    /// Apply changes to a canvas.
    fn edit(
        &self,
        canvas_id: &CanvasId,
        changes: &[EditChange],
    ) -> impl Future<Output = Result<OperationOutcome, SlackError>> + Send;
}
