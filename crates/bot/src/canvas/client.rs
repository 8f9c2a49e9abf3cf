//! [`CanvasApi`] over the Slack Web API.

use canvas_bot_core::{
    AccessLevel, CanvasId, DocumentCreateRequest, EditChange, OperationOutcome, SectionQuery,
    UserId,
};
use tracing::{debug, instrument, warn};

use super::types::{
    AccessSetBody, CanvasResponse, CreateCanvasBody, EditCanvasBody, SectionsLookupBody,
};
use super::{CanvasApi, CanvasOperation, SectionLookup};
use crate::slack::{SlackClient, SlackError};

impl SlackClient {
    /// Call a canvases method and log `ok: false` replies.
    async fn canvas_call<B>(
        &self,
        operation: CanvasOperation,
        body: &B,
    ) -> Result<CanvasResponse, SlackError>
    where
        B: serde::Serialize + Sync,
    {
        let response: CanvasResponse = self.call(operation.method(), body).await?;

        if response.ok {
            debug!(method = operation.method(), "Canvas call succeeded");
        } else {
            warn!(
                method = operation.method(),
                error = ?response.error,
                "Slack rejected canvas call"
            );
        }

        Ok(response)
    }
}

impl CanvasApi for SlackClient {
    #[instrument(skip(self, request), fields(title = %request.title))]
    async fn create(&self, request: &DocumentCreateRequest) -> Result<OperationOutcome, SlackError> {
        let body = CreateCanvasBody {
            title: &request.title,
            document_content: request.document_content(),
        };

        let response = self.canvas_call(CanvasOperation::Create, &body).await?;
        Ok(response.outcome())
    }

    #[instrument(skip(self, user_ids), fields(canvas_id = %canvas_id, users = user_ids.len()))]
    async fn grant_access(
        &self,
        canvas_id: &CanvasId,
        user_ids: &[UserId],
        level: AccessLevel,
    ) -> Result<OperationOutcome, SlackError> {
        let body = AccessSetBody {
            canvas_id,
            access_level: level,
            user_ids,
        };

        let response = self.canvas_call(CanvasOperation::GrantAccess, &body).await?;
        Ok(response.outcome())
    }

    #[instrument(skip(self, query), fields(canvas_id = %query.canvas_id))]
    async fn lookup_sections(&self, query: &SectionQuery) -> Result<SectionLookup, SlackError> {
        let body = SectionsLookupBody {
            canvas_id: &query.canvas_id,
            criteria: query.criteria(),
        };

        let response = self
            .canvas_call(CanvasOperation::LookupSections, &body)
            .await?;

        Ok(SectionLookup {
            outcome: response.outcome(),
            sections: response.sections,
        })
    }

    #[instrument(skip(self, changes), fields(canvas_id = %canvas_id, changes = changes.len()))]
    async fn edit(
        &self,
        canvas_id: &CanvasId,
        changes: &[EditChange],
    ) -> Result<OperationOutcome, SlackError> {
        let body = EditCanvasBody { canvas_id, changes };

        let response = self.canvas_call(CanvasOperation::Edit, &body).await?;
        Ok(response.outcome())
    }
}
