//! Slack webhook handlers for slash commands and modal submissions.
//!
//! Both endpoints verify the request signature before reading the body.

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{debug, error, info, instrument, warn};

use crate::error::AppError;
use crate::slack::{
    CanvasMode, CommandResponse, InteractionPayload, SlashCommand, SubmissionError,
    ViewErrorsResponse, build_canvas_modal, build_failure_message, parse_submission,
};
use crate::state::AppState;

pub const CREATE_CANVAS_COMMAND: &str = "/create_canvas";
pub const EDIT_CANVAS_COMMAND: &str = "/edit_canvas";
pub const HELLO_COMMAND: &str = "/hello";

const VIEW_SUBMISSION: &str = "view_submission";

/// Create Slack webhook routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/slack/commands", post(handle_command))
        .route("/slack/interactions", post(handle_interaction))
}

/// Check the `X-Slack-Signature` of a request against its raw body.
fn verify_request(state: &AppState, headers: &HeaderMap, body: &str) -> Result<(), AppError> {
    let timestamp = headers
        .get("X-Slack-Request-Timestamp")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::BadRequest("Missing timestamp header".into()))?;

    let signature = headers
        .get("X-Slack-Signature")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::BadRequest("Missing signature header".into()))?;

    state
        .slack()
        .verify_signature(timestamp, body, signature)
        .map_err(|e| AppError::Unauthorized(e.to_string()))
}

/// Handle a slash command.
///
/// The canvas commands open their modal; the reply body is empty on success
/// and an ephemeral error message otherwise.
#[instrument(skip(state, headers, body))]
async fn handle_command(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<Response, AppError> {
    verify_request(&state, &headers, &body)?;

    let command =
        SlashCommand::from_form(&body).map_err(|e| AppError::BadRequest(e.to_string()))?;

    info!(command = %command.command, user = %command.user_id, "Slash command received");

    let mode = match command.command.as_str() {
        CREATE_CANVAS_COMMAND => CanvasMode::Create,
        EDIT_CANVAS_COMMAND => CanvasMode::Edit,
        HELLO_COMMAND => {
            let reply = CommandResponse::ephemeral(format!("Hi <@{}>!", command.user_id));
            return Ok(Json(reply).into_response());
        }
        other => {
            warn!(command = %other, "Unknown slash command");
            let reply = CommandResponse::ephemeral(format!("Sorry, I don't know {other}."));
            return Ok(Json(reply).into_response());
        }
    };

    if command.trigger_id.is_empty() {
        return Err(AppError::BadRequest("Missing trigger_id".into()));
    }

    match state
        .slack()
        .open_view(&command.trigger_id, build_canvas_modal(mode))
        .await
    {
        Ok(()) => Ok(StatusCode::OK.into_response()),
        Err(e) => {
            error!(error = %e, callback_id = mode.callback_id(), "Failed to open canvas modal");
            let reply =
                CommandResponse::ephemeral(build_failure_message("open the form", &e.to_string()));
            Ok(Json(reply).into_response())
        }
    }
}

/// Handle an interaction webhook.
///
/// A valid canvas form is acknowledged at once and processed on a spawned
/// task; the outcome reaches the user as a direct message. Invalid forms are
/// answered with per-field errors so the modal stays open.
#[instrument(skip(state, headers, body))]
async fn handle_interaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> Result<Response, AppError> {
    verify_request(&state, &headers, &body)?;

    let payload =
        InteractionPayload::from_form(&body).map_err(|e| AppError::BadRequest(e.to_string()))?;

    if payload.interaction_type != VIEW_SUBMISSION {
        debug!(interaction_type = %payload.interaction_type, "Ignoring interaction");
        return Ok(StatusCode::OK.into_response());
    }

    let view = payload
        .view
        .as_ref()
        .ok_or_else(|| AppError::BadRequest("view_submission without view".into()))?;

    let submission = match parse_submission(view) {
        Ok(submission) => submission,
        Err(SubmissionError::InvalidFields(errors)) => {
            debug!(fields = errors.len(), "Rejecting canvas form");
            return Ok(Json(ViewErrorsResponse::new(errors)).into_response());
        }
        Err(SubmissionError::UnknownCallback(callback_id)) => {
            return Err(AppError::BadRequest(format!(
                "Unknown view callback: {callback_id}"
            )));
        }
    };

    info!(
        submitted_by = %payload.user.id,
        recipient = %submission.recipient(),
        callback_id = %view.callback_id,
        "Canvas form submitted"
    );

    tokio::spawn(async move {
        if let Ok(notification) = state.workflow().submit(submission).await {
            debug!(success = notification.is_success(), "Canvas submission handled");
        }
    });

    Ok(StatusCode::OK.into_response())
}
