//! Section lookup for the edit workflow.

use canvas_bot_core::{SectionQuery, SectionRef};
use tracing::{debug, instrument};

use super::{CanvasApi, CanvasError, CanvasOperation};

/// Find the section a change should target.
///
/// The first section Slack returns is taken as the match. Later matches are
/// ignored, and an empty list is an error; no further pages are requested.
///
/// # Errors
///
/// Returns `CanvasError::Transport` or `CanvasError::Api` when the lookup
/// fails, and `CanvasError::SectionNotFound` when it matches nothing.
#[instrument(skip(api, query), fields(canvas_id = %query.canvas_id))]
pub async fn find_section<A>(api: &A, query: &SectionQuery) -> Result<SectionRef, CanvasError>
where
    A: CanvasApi + ?Sized,
{
    let lookup = api
        .lookup_sections(query)
        .await
        .map_err(|source| CanvasError::Transport {
            operation: CanvasOperation::LookupSections,
            source,
        })?;

    lookup
        .outcome
        .into_result()
        .map_err(|message| CanvasError::Api {
            operation: CanvasOperation::LookupSections,
            message,
        })?;

    debug!(matches = lookup.sections.len(), "Sections looked up");

    lookup
        .sections
        .into_iter()
        .next()
        .ok_or_else(|| CanvasError::SectionNotFound {
            canvas_id: query.canvas_id.clone(),
            criteria: query.contains_text.clone(),
        })
}
