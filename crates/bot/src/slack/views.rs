//! Modal builders for the canvas forms and parsing of their submissions.
//!
//! Both forms share one layout: a user picker, a title and a multiline
//! content field. The edit form adds a canvas ID field at the top.

use std::collections::HashMap;

use canvas_bot_core::{
    CanvasId, CanvasSubmission, CreateSubmission, EditSubmission, IdError, UserId,
};

use super::types::{Block, InputElement, PlainText, SubmittedView, View, ViewState};

pub const CREATE_CANVAS_CALLBACK: &str = "create_canvas_view";
pub const EDIT_CANVAS_CALLBACK: &str = "edit_canvas_view";

pub const CANVAS_ID_BLOCK: &str = "canvas_id_block";
pub const CANVAS_ID_ACTION: &str = "canvas_id";
pub const USERS_SELECT_BLOCK: &str = "users_select";
pub const USERS_SELECT_ACTION: &str = "users_select";
pub const TITLE_BLOCK: &str = "title_block";
pub const TITLE_ACTION: &str = "title_input";
pub const CONTENT_BLOCK: &str = "content_block";
pub const CONTENT_ACTION: &str = "content_input";

/// Which canvas form a modal carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CanvasMode {
    Create,
    Edit,
}

impl CanvasMode {
    /// Callback ID the modal is opened with.
    #[must_use]
    pub const fn callback_id(self) -> &'static str {
        match self {
            Self::Create => CREATE_CANVAS_CALLBACK,
            Self::Edit => EDIT_CANVAS_CALLBACK,
        }
    }

    /// Mode for a submitted callback ID.
    #[must_use]
    pub fn from_callback_id(callback_id: &str) -> Option<Self> {
        match callback_id {
            CREATE_CANVAS_CALLBACK => Some(Self::Create),
            EDIT_CANVAS_CALLBACK => Some(Self::Edit),
            _ => None,
        }
    }

    const fn title(self) -> &'static str {
        match self {
            Self::Create => "Create Canvas",
            Self::Edit => "Update Canvas",
        }
    }
}

/// Why a submission could not be turned into a [`CanvasSubmission`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The view was not opened by this bot.
    UnknownCallback(String),
    /// One or more fields are missing or invalid, keyed by block ID.
    InvalidFields(HashMap<String, String>),
}

/// Build the modal for a canvas form.
#[must_use]
pub fn build_canvas_modal(mode: CanvasMode) -> View {
    let mut blocks = Vec::with_capacity(4);

    if mode == CanvasMode::Edit {
        blocks.push(text_input(CANVAS_ID_BLOCK, "Canvas ID", CANVAS_ID_ACTION, false));
    }

    blocks.push(Block::Input {
        block_id: USERS_SELECT_BLOCK.to_string(),
        label: PlainText::new("Select a user"),
        element: InputElement::UsersSelect {
            action_id: USERS_SELECT_ACTION.to_string(),
            placeholder: Some(PlainText::new("Select users")),
        },
        optional: false,
    });
    blocks.push(text_input(TITLE_BLOCK, "Title", TITLE_ACTION, false));
    blocks.push(text_input(CONTENT_BLOCK, "Content", CONTENT_ACTION, true));

    View {
        view_type: "modal",
        callback_id: mode.callback_id().to_string(),
        title: PlainText::new(mode.title()),
        submit: Some(PlainText::new("Submit")),
        close: None,
        blocks,
    }
}

fn text_input(block_id: &str, label: &str, action_id: &str, multiline: bool) -> Block {
    Block::Input {
        block_id: block_id.to_string(),
        label: PlainText::new(label),
        element: InputElement::PlainTextInput {
            action_id: action_id.to_string(),
            multiline,
            placeholder: None,
        },
        optional: false,
    }
}

/// Parse a submitted canvas modal into a typed submission.
///
/// # Errors
///
/// Returns `SubmissionError::UnknownCallback` for views this bot did not
/// open and `SubmissionError::InvalidFields` when required fields are blank.
pub fn parse_submission(view: &SubmittedView) -> Result<CanvasSubmission, SubmissionError> {
    let mode = CanvasMode::from_callback_id(&view.callback_id)
        .ok_or_else(|| SubmissionError::UnknownCallback(view.callback_id.clone()))?;

    let mut fields = FieldReader::new(&view.state);

    let canvas_id = (mode == CanvasMode::Edit)
        .then(|| fields.id(CANVAS_ID_BLOCK, CANVAS_ID_ACTION, CanvasId::parse));
    let user_id = fields.selected_user();
    let title = fields.text(TITLE_BLOCK, TITLE_ACTION);
    // Content may legitimately be empty.
    let content = view
        .state
        .get(CONTENT_BLOCK, CONTENT_ACTION)
        .and_then(|v| v.value.clone())
        .unwrap_or_default();

    if !fields.errors.is_empty() {
        return Err(SubmissionError::InvalidFields(fields.errors));
    }

    let (Some(user_id), Some(title)) = (user_id, title) else {
        return Err(SubmissionError::InvalidFields(fields.errors));
    };

    match canvas_id {
        None => Ok(CanvasSubmission::Create(CreateSubmission {
            user_id,
            title,
            content,
        })),
        Some(Some(canvas_id)) => Ok(CanvasSubmission::Edit(EditSubmission {
            user_id,
            canvas_id,
            title,
            content,
        })),
        Some(None) => Err(SubmissionError::InvalidFields(fields.errors)),
    }
}

/// Reads required fields from view state, collecting per-block errors.
struct FieldReader<'a> {
    state: &'a ViewState,
    errors: HashMap<String, String>,
}

impl<'a> FieldReader<'a> {
    fn new(state: &'a ViewState) -> Self {
        Self {
            state,
            errors: HashMap::new(),
        }
    }

    fn text(&mut self, block_id: &str, action_id: &str) -> Option<String> {
        let value = self
            .state
            .get(block_id, action_id)
            .and_then(|v| v.value.as_deref())
            .map(str::trim)
            .filter(|v| !v.is_empty());

        if value.is_none() {
            self.errors
                .insert(block_id.to_string(), "This field is required".to_string());
        }

        value.map(String::from)
    }

    fn id<T>(
        &mut self,
        block_id: &str,
        action_id: &str,
        parse: impl FnOnce(&str) -> Result<T, IdError>,
    ) -> Option<T> {
        let raw = self.text(block_id, action_id)?;
        match parse(&raw) {
            Ok(id) => Some(id),
            Err(e) => {
                self.errors.insert(block_id.to_string(), e.to_string());
                None
            }
        }
    }

    fn selected_user(&mut self) -> Option<UserId> {
        let user = self
            .state
            .get(USERS_SELECT_BLOCK, USERS_SELECT_ACTION)
            .and_then(|v| v.selected_user.as_deref())
            .and_then(|u| UserId::parse(u).ok());

        if user.is_none() {
            self.errors.insert(
                USERS_SELECT_BLOCK.to_string(),
                "Select a user".to_string(),
            );
        }

        user
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn submitted(callback_id: &str, values: serde_json::Value) -> SubmittedView {
        serde_json::from_value(json!({
            "id": "V1",
            "callback_id": callback_id,
            "state": {"values": values}
        }))
        .expect("valid view")
    }

    #[test]
    fn test_create_modal_layout() {
        let view = build_canvas_modal(CanvasMode::Create);
        assert_eq!(view.callback_id, CREATE_CANVAS_CALLBACK);

        let ids: Vec<_> = view.blocks.iter().filter_map(Block::block_id).collect();
        assert_eq!(ids, vec![USERS_SELECT_BLOCK, TITLE_BLOCK, CONTENT_BLOCK]);
    }

    #[test]
    fn test_edit_modal_starts_with_canvas_id() {
        let view = build_canvas_modal(CanvasMode::Edit);
        assert_eq!(view.callback_id, EDIT_CANVAS_CALLBACK);
        assert_eq!(
            view.blocks.first().and_then(Block::block_id),
            Some(CANVAS_ID_BLOCK)
        );
        assert_eq!(view.blocks.len(), 4);
    }

    #[test]
    fn test_content_input_is_multiline() {
        let view = build_canvas_modal(CanvasMode::Create);
        let value = serde_json::to_value(&view).expect("serialize");
        let content = value["blocks"]
            .as_array()
            .and_then(|blocks| blocks.last())
            .expect("content block");
        assert_eq!(content["element"]["multiline"], true);
        assert_eq!(value["type"], "modal");
    }

    #[test]
    fn test_parse_create_submission() {
        let view = submitted(
            CREATE_CANVAS_CALLBACK,
            json!({
                "users_select": {"users_select": {"type": "users_select", "selected_user": "U1"}},
                "title_block": {"title_input": {"type": "plain_text_input", "value": "Plan"}},
                "content_block": {"content_input": {"type": "plain_text_input", "value": "hello"}}
            }),
        );

        let submission = parse_submission(&view).expect("valid submission");
        assert_eq!(
            submission,
            CanvasSubmission::Create(CreateSubmission {
                user_id: UserId::new("U1"),
                title: "Plan".to_string(),
                content: "hello".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_edit_submission_trims_canvas_id() {
        let view = submitted(
            EDIT_CANVAS_CALLBACK,
            json!({
                "canvas_id_block": {"canvas_id": {"type": "plain_text_input", "value": " F123 "}},
                "users_select": {"users_select": {"type": "users_select", "selected_user": "U1"}},
                "title_block": {"title_input": {"type": "plain_text_input", "value": "Plan"}},
                "content_block": {"content_input": {"type": "plain_text_input", "value": null}}
            }),
        );

        match parse_submission(&view).expect("valid submission") {
            CanvasSubmission::Edit(edit) => {
                assert_eq!(edit.canvas_id.as_str(), "F123");
                assert_eq!(edit.content, "");
            }
            CanvasSubmission::Create(_) => panic!("Expected edit submission"),
        }
    }

    #[test]
    fn test_parse_reports_missing_fields_by_block() {
        let view = submitted(
            EDIT_CANVAS_CALLBACK,
            json!({
                "canvas_id_block": {"canvas_id": {"type": "plain_text_input", "value": "F1 F2"}},
                "title_block": {"title_input": {"type": "plain_text_input", "value": "   "}}
            }),
        );

        let Err(SubmissionError::InvalidFields(errors)) = parse_submission(&view) else {
            panic!("Expected field errors");
        };
        assert!(errors.contains_key(CANVAS_ID_BLOCK));
        assert!(errors.contains_key(USERS_SELECT_BLOCK));
        assert!(errors.contains_key(TITLE_BLOCK));
        assert!(!errors.contains_key(CONTENT_BLOCK));
    }

    #[test]
    fn test_parse_unknown_callback() {
        let view = submitted("modal-id", json!({}));
        assert_eq!(
            parse_submission(&view),
            Err(SubmissionError::UnknownCallback("modal-id".to_string()))
        );
    }
}
