//! Integration tests for the canvas bot.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p canvas-bot-integration-tests
//! ```
//!
//! Slack is never contacted: [`FakeCanvasApi`] answers canvas calls from a
//! script and records them, and [`RecordingNotifier`] keeps every message it
//! is asked to deliver.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use canvas_bot::canvas::{CanvasApi, SectionLookup};
use canvas_bot::config::{CanvasConfig, WorkspaceConfig};
use canvas_bot::services::{CanvasWorkflow, Notifier};
use canvas_bot::slack::SlackError;
use canvas_bot_core::{
    AccessLevel, CanvasId, DocumentCreateRequest, EditChange, OperationOutcome, SectionId,
    SectionQuery, SectionRef, UserId,
};

/// Workspace host used by [`workspace`].
pub const WORKSPACE_HOST: &str = "acme.slack.com";
/// Team ID used by [`workspace`].
pub const TEAM_ID: &str = "T05SD2E14R3";

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A canvas call as the fake received it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    Create(DocumentCreateRequest),
    GrantAccess {
        canvas_id: CanvasId,
        user_ids: Vec<UserId>,
        level: AccessLevel,
    },
    LookupSections(SectionQuery),
    Edit {
        canvas_id: CanvasId,
        changes: Vec<EditChange>,
    },
}

/// Scripted, recording [`CanvasApi`].
///
/// Replies are consumed in order per method. A call with no scripted reply
/// fails with a transport error.
#[derive(Debug, Default)]
pub struct FakeCanvasApi {
    create: Mutex<VecDeque<Result<OperationOutcome, SlackError>>>,
    grant: Mutex<VecDeque<Result<OperationOutcome, SlackError>>>,
    lookup: Mutex<VecDeque<Result<SectionLookup, SlackError>>>,
    edit: Mutex<VecDeque<Result<OperationOutcome, SlackError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeCanvasApi {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn on_create(self, reply: Result<OperationOutcome, SlackError>) -> Self {
        lock(&self.create).push_back(reply);
        self
    }

    #[must_use]
    pub fn on_grant(self, reply: Result<OperationOutcome, SlackError>) -> Self {
        lock(&self.grant).push_back(reply);
        self
    }

    #[must_use]
    pub fn on_lookup(self, reply: Result<SectionLookup, SlackError>) -> Self {
        lock(&self.lookup).push_back(reply);
        self
    }

    #[must_use]
    pub fn on_edit(self, reply: Result<OperationOutcome, SlackError>) -> Self {
        lock(&self.edit).push_back(reply);
        self
    }

    /// Calls received so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        lock(&self.calls).clone()
    }

    fn record(&self, call: RecordedCall) {
        lock(&self.calls).push(call);
    }

    fn next<T>(queue: &Mutex<VecDeque<Result<T, SlackError>>>, method: &str) -> Result<T, SlackError> {
        lock(queue).pop_front().unwrap_or_else(|| {
            Err(SlackError::Request(format!("no scripted reply for {method}")))
        })
    }
}

impl CanvasApi for FakeCanvasApi {
    async fn create(&self, request: &DocumentCreateRequest) -> Result<OperationOutcome, SlackError> {
        self.record(RecordedCall::Create(request.clone()));
        Self::next(&self.create, "canvases.create")
    }

    async fn grant_access(
        &self,
        canvas_id: &CanvasId,
        user_ids: &[UserId],
        level: AccessLevel,
    ) -> Result<OperationOutcome, SlackError> {
        self.record(RecordedCall::GrantAccess {
            canvas_id: canvas_id.clone(),
            user_ids: user_ids.to_vec(),
            level,
        });
        Self::next(&self.grant, "canvases.access.set")
    }

    async fn lookup_sections(&self, query: &SectionQuery) -> Result<SectionLookup, SlackError> {
        self.record(RecordedCall::LookupSections(query.clone()));
        Self::next(&self.lookup, "canvases.sections.lookup")
    }

    async fn edit(
        &self,
        canvas_id: &CanvasId,
        changes: &[EditChange],
    ) -> Result<OperationOutcome, SlackError> {
        self.record(RecordedCall::Edit {
            canvas_id: canvas_id.clone(),
            changes: changes.to_vec(),
        });
        Self::next(&self.edit, "canvases.edit")
    }
}

/// [`Notifier`] that keeps every message.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<(UserId, String)>>,
}

impl RecordingNotifier {
    /// Messages delivered so far, in order.
    #[must_use]
    pub fn sent(&self) -> Vec<(UserId, String)> {
        lock(&self.sent).clone()
    }
}

impl Notifier for RecordingNotifier {
    async fn notify(&self, recipient: &UserId, text: &str) -> Result<(), SlackError> {
        lock(&self.sent).push((recipient.clone(), text.to_string()));
        Ok(())
    }
}

/// Workspace coordinates for canvas links in tests.
#[must_use]
pub fn workspace() -> WorkspaceConfig {
    WorkspaceConfig {
        host: WORKSPACE_HOST.to_string(),
        team_id: TEAM_ID.to_string(),
    }
}

/// Workflow over `api` with default canvas settings.
#[must_use]
pub fn workflow(api: FakeCanvasApi) -> CanvasWorkflow<FakeCanvasApi, RecordingNotifier> {
    CanvasWorkflow::new(
        api,
        RecordingNotifier::default(),
        workspace(),
        CanvasConfig::default(),
    )
}

/// Successful lookup reply listing `ids` in order.
#[must_use]
pub fn sections(ids: &[&str]) -> SectionLookup {
    SectionLookup {
        outcome: OperationOutcome::ok(None),
        sections: ids
            .iter()
            .map(|id| SectionRef {
                id: SectionId::new(*id),
            })
            .collect(),
    }
}
