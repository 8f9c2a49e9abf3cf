//! Slack integration for the canvas forms.
//!
//! This module provides:
//! - [`SlackClient`] for calling the Web API and posting messages
//! - Block Kit types for modals and messages
//! - Modal builders and submission parsing for the canvas forms
//! - Webhook signature verification
//!
//! # Flow
//!
//! 1. A user runs `/create_canvas` or `/edit_canvas`
//! 2. The command handler opens the matching modal
//! 3. Slack posts the `view_submission`, the signature is verified
//! 4. The submission is parsed and handed to the canvas workflow
//! 5. The outcome is sent to the selected user as a direct message

mod client;
mod error;
mod messages;
mod types;
mod views;

pub use client::SlackClient;
pub use error::SlackError;
pub use messages::{
    build_created_message, build_failure_message, build_updated_message, canvas_url,
};
pub use types::{
    Block, CommandResponse, InputElement, InteractionPayload, InteractionUser,
    OpenViewRequest, OpenViewResponse, PlainText, PostMessageResponse, SlashCommand, StateValue,
    SubmittedView, Text, View, ViewErrorsResponse, ViewState,
};
pub use views::{
    CANVAS_ID_ACTION, CANVAS_ID_BLOCK, CONTENT_ACTION, CONTENT_BLOCK, CREATE_CANVAS_CALLBACK,
    CanvasMode, EDIT_CANVAS_CALLBACK, SubmissionError, TITLE_ACTION, TITLE_BLOCK,
    USERS_SELECT_ACTION, USERS_SELECT_BLOCK, build_canvas_modal, parse_submission,
};
