//! Slack Block Kit and payload types.
//!
//! These types represent the subset of the Slack Block Kit specification
//! needed for modal forms and plain notifications, plus the inbound slash
//! command and interaction payloads.
//!
//! See: <https://api.slack.com/block-kit>

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::SlackError;

/// A Slack message with blocks.
#[derive(Debug, Clone, Serialize)]
pub struct SlackMessage {
    /// Channel or user ID to post to.
    pub channel: String,
    /// Message blocks.
    pub blocks: Vec<Block>,
    /// Optional plain text fallback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// Block Kit block types.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// Section block with text.
    Section { text: Text },
    /// Input block collecting one form field.
    Input {
        block_id: String,
        label: PlainText,
        element: InputElement,
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        optional: bool,
    },
}

impl Block {
    /// Block ID of an input block.
    #[must_use]
    pub fn block_id(&self) -> Option<&str> {
        match self {
            Self::Input { block_id, .. } => Some(block_id),
            Self::Section { .. } => None,
        }
    }
}

/// Text object types.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Text {
    /// Markdown text (supports formatting).
    Mrkdwn { text: String },
}

impl Text {
    /// Create a markdown text object.
    #[must_use]
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self::Mrkdwn { text: text.into() }
    }
}

/// Plain text object (for labels and modal chrome).
#[derive(Debug, Clone, Serialize)]
pub struct PlainText {
    #[serde(rename = "type")]
    pub text_type: &'static str,
    pub text: String,
    pub emoji: bool,
}

impl PlainText {
    /// Create a new plain text object.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text_type: "plain_text",
            text: text.into(),
            emoji: true,
        }
    }
}

/// Interactive elements allowed inside an input block.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputElement {
    /// Free text field.
    PlainTextInput {
        action_id: String,
        #[serde(skip_serializing_if = "std::ops::Not::not")]
        multiline: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<PlainText>,
    },
    /// Single workspace user picker.
    UsersSelect {
        action_id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        placeholder: Option<PlainText>,
    },
}

/// A modal view.
#[derive(Debug, Clone, Serialize)]
pub struct View {
    #[serde(rename = "type")]
    pub view_type: &'static str,
    pub callback_id: String,
    pub title: PlainText,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit: Option<PlainText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<PlainText>,
    pub blocks: Vec<Block>,
}

/// Body of `views.open`.
#[derive(Debug, Clone, Serialize)]
pub struct OpenViewRequest {
    pub trigger_id: String,
    pub view: View,
}

// =============================================================================
// Response Types
// =============================================================================

/// Response from posting a message.
#[derive(Debug, Clone, Deserialize)]
pub struct PostMessageResponse {
    /// Whether the request was successful.
    pub ok: bool,
    /// Channel ID where message was posted.
    #[serde(default)]
    pub channel: Option<String>,
    /// Message timestamp (unique ID).
    #[serde(default)]
    pub ts: Option<String>,
    /// Error message if not ok.
    #[serde(default)]
    pub error: Option<String>,
}

/// Response from opening a view.
#[derive(Debug, Clone, Deserialize)]
pub struct OpenViewResponse {
    /// Whether the request was successful.
    pub ok: bool,
    /// Error message if not ok.
    #[serde(default)]
    pub error: Option<String>,
}

/// Immediate reply to a slash command.
#[derive(Debug, Clone, Serialize)]
pub struct CommandResponse {
    pub response_type: &'static str,
    pub text: String,
}

impl CommandResponse {
    /// Reply visible only to the invoking user.
    #[must_use]
    pub fn ephemeral(text: impl Into<String>) -> Self {
        Self {
            response_type: "ephemeral",
            text: text.into(),
        }
    }
}

/// Reply to a `view_submission` that keeps the modal open with field errors.
#[derive(Debug, Clone, Serialize)]
pub struct ViewErrorsResponse {
    pub response_action: &'static str,
    /// Error message keyed by input block ID.
    pub errors: HashMap<String, String>,
}

impl ViewErrorsResponse {
    #[must_use]
    pub fn new(errors: HashMap<String, String>) -> Self {
        Self {
            response_action: "errors",
            errors,
        }
    }
}

// =============================================================================
// Inbound Payloads
// =============================================================================

/// Slash command invocation (form-encoded by Slack).
#[derive(Debug, Clone, Default)]
pub struct SlashCommand {
    /// Command name including the slash.
    pub command: String,
    /// Text typed after the command.
    pub text: String,
    /// Invoking user.
    pub user_id: String,
    /// Channel the command was typed in.
    pub channel_id: String,
    /// Short-lived ID for opening a modal.
    pub trigger_id: String,
    /// Team (workspace) ID.
    pub team_id: String,
}

impl SlashCommand {
    /// Parse a form-encoded slash command body.
    ///
    /// # Errors
    ///
    /// Returns `SlackError::InvalidPayload` if `command` or `user_id` is missing.
    pub fn from_form(body: &str) -> Result<Self, SlackError> {
        let mut command = Self::default();
        for (key, value) in url::form_urlencoded::parse(body.as_bytes()) {
            let field = match key.as_ref() {
                "command" => &mut command.command,
                "text" => &mut command.text,
                "user_id" => &mut command.user_id,
                "channel_id" => &mut command.channel_id,
                "trigger_id" => &mut command.trigger_id,
                "team_id" => &mut command.team_id,
                _ => continue,
            };
            *field = value.into_owned();
        }

        if command.command.is_empty() || command.user_id.is_empty() {
            return Err(SlackError::InvalidPayload(
                "Slash command is missing command or user_id".to_string(),
            ));
        }

        Ok(command)
    }
}

/// Slack interaction payload.
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionPayload {
    /// Type of interaction (e.g. `view_submission`).
    #[serde(rename = "type")]
    pub interaction_type: String,
    /// User who triggered the interaction.
    pub user: InteractionUser,
    /// Submitted view, for view interactions.
    #[serde(default)]
    pub view: Option<SubmittedView>,
    /// Trigger ID for opening modals.
    #[serde(default)]
    pub trigger_id: Option<String>,
}

impl InteractionPayload {
    /// Parse the `payload` field of a form-encoded interaction body.
    ///
    /// # Errors
    ///
    /// Returns `SlackError::InvalidPayload` if the field is missing or is not
    /// a valid interaction.
    pub fn from_form(body: &str) -> Result<Self, SlackError> {
        let payload = url::form_urlencoded::parse(body.as_bytes())
            .find(|(key, _)| key == "payload")
            .map(|(_, value)| value)
            .ok_or_else(|| SlackError::InvalidPayload("Missing payload field".to_string()))?;

        serde_json::from_str(&payload)
            .map_err(|e| SlackError::InvalidPayload(format!("Failed to parse payload: {e}")))
    }
}

/// User who triggered an interaction.
#[derive(Debug, Clone, Deserialize)]
pub struct InteractionUser {
    /// Slack user ID.
    pub id: String,
    /// Username.
    #[serde(default)]
    pub username: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
}

/// View attached to a `view_submission`.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmittedView {
    /// View ID.
    #[serde(default)]
    pub id: Option<String>,
    /// Callback ID set when the modal was opened.
    pub callback_id: String,
    /// Current input values.
    #[serde(default)]
    pub state: ViewState,
}

/// Input values of a view, keyed by block ID then action ID.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewState {
    #[serde(default)]
    pub values: HashMap<String, HashMap<String, StateValue>>,
}

impl ViewState {
    /// Look up the value of one input element.
    #[must_use]
    pub fn get(&self, block_id: &str, action_id: &str) -> Option<&StateValue> {
        self.values.get(block_id)?.get(action_id)
    }
}

/// Value of a single input element.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StateValue {
    /// Element type.
    #[serde(rename = "type", default)]
    pub element_type: Option<String>,
    /// Text of a `plain_text_input`.
    #[serde(default)]
    pub value: Option<String>,
    /// Selection of a `users_select`.
    #[serde(default)]
    pub selected_user: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_input_block_serialization() {
        let block = Block::Input {
            block_id: "title_block".to_string(),
            label: PlainText::new("Title"),
            element: InputElement::PlainTextInput {
                action_id: "title_input".to_string(),
                multiline: false,
                placeholder: None,
            },
            optional: false,
        };

        let value = serde_json::to_value(&block).expect("serialize");
        assert_eq!(value["type"], "input");
        assert_eq!(value["element"]["type"], "plain_text_input");
        assert!(value["element"].get("multiline").is_none());
        assert!(value.get("optional").is_none());
        assert_eq!(block.block_id(), Some("title_block"));
    }

    #[test]
    fn test_section_block_has_no_block_id() {
        let block = Block::Section {
            text: Text::mrkdwn("*hi*"),
        };

        assert_eq!(block.block_id(), None);
    }

    #[test]
    fn test_view_state_lookup() {
        let state: ViewState = serde_json::from_value(json!({
            "values": {
                "users_select": {
                    "users_select": {"type": "users_select", "selected_user": "U1"}
                }
            }
        }))
        .expect("deserialize");

        let value = state.get("users_select", "users_select").expect("present");
        assert_eq!(value.selected_user.as_deref(), Some("U1"));
        assert!(state.get("title_block", "title_input").is_none());
    }

    #[test]
    fn test_slash_command_from_form() {
        let body = "token=x&team_id=T1&channel_id=C1&user_id=U1&command=%2Fedit_canvas&text=&trigger_id=13345224609.738474920.8088930838d88f008e0";
        let command = SlashCommand::from_form(body).expect("valid command");
        assert_eq!(command.command, "/edit_canvas");
        assert_eq!(command.user_id, "U1");
        assert_eq!(command.team_id, "T1");
        assert_eq!(command.trigger_id, "13345224609.738474920.8088930838d88f008e0");
    }

    #[test]
    fn test_slash_command_missing_user() {
        let result = SlashCommand::from_form("command=%2Fcreate_canvas");
        assert!(matches!(result, Err(SlackError::InvalidPayload(_))));
    }

    #[test]
    fn test_view_errors_response_shape() {
        let mut errors = HashMap::new();
        errors.insert("title_block".to_string(), "Required".to_string());
        let value = serde_json::to_value(ViewErrorsResponse::new(errors)).expect("serialize");
        assert_eq!(value["response_action"], "errors");
        assert_eq!(value["errors"]["title_block"], "Required");
    }

    #[test]
    fn test_interaction_from_form_decodes_plus_and_percent() {
        let json = r#"{"type":"view_submission","user":{"id":"U1","name":"Ada Lovelace"},"view":{"callback_id":"create_canvas_view"}}"#;
        let body: String = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("payload", json)
            .finish();

        let payload = InteractionPayload::from_form(&body).expect("parse");
        assert_eq!(payload.interaction_type, "view_submission");
        assert_eq!(payload.user.id, "U1");
        assert_eq!(payload.user.name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(
            payload.view.map(|v| v.callback_id).as_deref(),
            Some("create_canvas_view")
        );
    }

    #[test]
    fn test_interaction_from_form_requires_payload() {
        assert!(matches!(
            InteractionPayload::from_form("token=abc"),
            Err(SlackError::InvalidPayload(_))
        ));
    }
}
