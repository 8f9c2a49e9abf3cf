//! Integration tests for the canvas create and update workflows.
//!
//! These drive `CanvasWorkflow` end to end against a scripted canvases API
//! and check which remote calls are made and what the user is told.

use canvas_bot::services::NotificationStatus;
use canvas_bot::slack::SlackError;
use canvas_bot_core::{
    AccessLevel, CanvasId, CanvasSubmission, CreateSubmission, EditOperation, EditSubmission,
    OperationOutcome, UserId,
};
use canvas_bot_integration_tests::{FakeCanvasApi, RecordedCall, sections, workflow};

fn create(user: &str, title: &str, content: &str) -> CanvasSubmission {
    CanvasSubmission::Create(CreateSubmission {
        user_id: UserId::new(user),
        title: title.to_string(),
        content: content.to_string(),
    })
}

fn edit(user: &str, canvas: &str, title: &str) -> CanvasSubmission {
    CanvasSubmission::Edit(EditSubmission {
        user_id: UserId::new(user),
        canvas_id: CanvasId::new(canvas),
        title: title.to_string(),
        content: "ignored in literal mode".to_string(),
    })
}

// =============================================================================
// Create Flow
// =============================================================================

#[tokio::test]
async fn test_create_success_notifies_owner_with_canvas_id() {
    let api = FakeCanvasApi::new()
        .on_create(Ok(OperationOutcome::ok(Some("C123".to_string()))))
        .on_grant(Ok(OperationOutcome::ok(None)));
    let workflow = workflow(api);

    let notification = workflow
        .submit(create("U1", "Plan", "hello"))
        .await
        .expect("delivered");

    assert_eq!(notification.status, NotificationStatus::Success);
    assert_eq!(notification.recipient, UserId::new("U1"));
    assert!(notification.text.contains("C123"));

    let sent = workflow.notifier().sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent.first().map(|(to, _)| to.as_str()), Some("U1"));
}

#[tokio::test]
async fn test_create_sends_title_and_body() {
    let api = FakeCanvasApi::new()
        .on_create(Ok(OperationOutcome::ok(Some("C123".to_string()))))
        .on_grant(Ok(OperationOutcome::ok(None)));
    let workflow = workflow(api);

    workflow.submit(create("U1", "Plan", "hello")).await.expect("delivered");

    let calls = workflow.api().calls();
    let Some(RecordedCall::Create(request)) = calls.first() else {
        panic!("first call should be create, got {calls:?}");
    };
    assert_eq!(request.title, "Plan");
    assert_eq!(request.owner_id, UserId::new("U1"));
    assert!(request.body_markdown.ends_with("hello"));

    assert_eq!(
        calls.get(1),
        Some(&RecordedCall::GrantAccess {
            canvas_id: CanvasId::new("C123"),
            user_ids: vec![UserId::new("U1")],
            level: AccessLevel::Write,
        })
    );
}

#[tokio::test]
async fn test_create_rejected_reports_error_and_stops() {
    let api = FakeCanvasApi::new().on_create(Ok(OperationOutcome::failed("invalid_auth")));
    let workflow = workflow(api);

    let notification = workflow
        .submit(create("U1", "Plan", "hello"))
        .await
        .expect("delivered");

    assert_eq!(notification.status, NotificationStatus::Failure);
    assert_eq!(notification.recipient, UserId::new("U1"));
    assert!(notification.text.contains("invalid_auth"));

    // No grant after a failed create
    let calls = workflow.api().calls();
    assert_eq!(calls.len(), 1);
    assert!(matches!(calls.first(), Some(RecordedCall::Create(_))));
}

#[tokio::test]
async fn test_create_transport_failure_is_reported_not_raised() {
    let api = FakeCanvasApi::new().on_create(Err(SlackError::Timeout(
        "operation timed out".to_string(),
    )));
    let workflow = workflow(api);

    let notification = workflow
        .submit(create("U1", "Plan", "hello"))
        .await
        .expect("delivered");

    assert_eq!(notification.status, NotificationStatus::Failure);
    assert!(notification.text.contains("Failed to create canvas"));
    assert_eq!(workflow.api().calls().len(), 1);
}

#[tokio::test]
async fn test_grant_failure_leaves_canvas_created() {
    let api = FakeCanvasApi::new()
        .on_create(Ok(OperationOutcome::ok(Some("C77".to_string()))))
        .on_grant(Ok(OperationOutcome::failed("user_not_found")));
    let workflow = workflow(api);

    let notification = workflow
        .submit(create("U1", "Plan", "hello"))
        .await
        .expect("delivered");

    assert_eq!(notification.status, NotificationStatus::Failure);
    assert!(notification.text.contains("user_not_found"));
    assert!(notification.text.contains("/docs/T05SD2E14R3/C77"));
    // Nothing is deleted or retried
    assert_eq!(workflow.api().calls().len(), 2);
}

#[tokio::test]
async fn test_repeated_creates_are_independent() {
    let api = FakeCanvasApi::new()
        .on_create(Ok(OperationOutcome::ok(Some("C1".to_string()))))
        .on_grant(Ok(OperationOutcome::ok(None)))
        .on_create(Ok(OperationOutcome::ok(Some("C2".to_string()))))
        .on_grant(Ok(OperationOutcome::ok(None)));
    let workflow = workflow(api);

    let first = workflow.submit(create("U1", "Plan", "x")).await.expect("first");
    let second = workflow.submit(create("U1", "Plan", "x")).await.expect("second");

    assert!(first.text.contains("C1"));
    assert!(second.text.contains("C2"));
    assert_eq!(workflow.api().calls().len(), 4);
}

// =============================================================================
// Update Flow
// =============================================================================

#[tokio::test]
async fn test_update_without_matching_section_reports_failure() {
    let api = FakeCanvasApi::new().on_lookup(Ok(sections(&[])));
    let workflow = workflow(api);

    let notification = workflow
        .submit(edit("U1", "F1", "Plan"))
        .await
        .expect("delivered");

    assert_eq!(notification.status, NotificationStatus::Failure);
    assert!(notification.text.contains("no section contains"));

    let calls = workflow.api().calls();
    assert_eq!(calls.len(), 1, "edit must not be attempted: {calls:?}");
}

#[tokio::test]
async fn test_update_targets_first_section() {
    let api = FakeCanvasApi::new()
        .on_lookup(Ok(sections(&["S1", "S2"])))
        .on_edit(Ok(OperationOutcome::ok(None)));
    let workflow = workflow(api);

    workflow
        .submit(edit("U1", "F1", "Plan"))
        .await
        .expect("delivered");

    let calls = workflow.api().calls();
    let Some(RecordedCall::Edit { canvas_id, changes }) = calls.get(1) else {
        panic!("second call should be edit, got {calls:?}");
    };
    assert_eq!(canvas_id.as_str(), "F1");
    assert_eq!(changes.len(), 1);

    let change = changes.first().expect("one change");
    assert_eq!(change.operation, EditOperation::InsertAfter);
    assert_eq!(change.target().map(|s| s.as_str()), Some("S1"));
    assert_eq!(
        change.document_content.as_ref().map(|c| c.markdown.as_str()),
        Some("content edit")
    );
}

#[tokio::test]
async fn test_update_success_links_to_canvas() {
    let api = FakeCanvasApi::new()
        .on_lookup(Ok(sections(&["S1"])))
        .on_edit(Ok(OperationOutcome::ok(None)));
    let workflow = workflow(api);

    let notification = workflow
        .submit(edit("U9", "F0123ABC", "Roadmap"))
        .await
        .expect("delivered");

    assert_eq!(notification.status, NotificationStatus::Success);
    assert_eq!(notification.recipient, UserId::new("U9"));
    assert!(notification.text.contains("Roadmap"));
    assert!(
        notification
            .text
            .contains("https://acme.slack.com/docs/T05SD2E14R3/F0123ABC")
    );
}

#[tokio::test]
async fn test_update_lookup_rejected_skips_edit() {
    let api = FakeCanvasApi::new().on_lookup(Ok(sections_failed("canvas_not_found")));
    let workflow = workflow(api);

    let notification = workflow
        .submit(edit("U1", "F1", "Plan"))
        .await
        .expect("delivered");

    assert_eq!(notification.status, NotificationStatus::Failure);
    assert!(notification.text.contains("canvas_not_found"));
    assert_eq!(workflow.api().calls().len(), 1);
}

#[tokio::test]
async fn test_update_edit_rejected_reports_error() {
    let api = FakeCanvasApi::new()
        .on_lookup(Ok(sections(&["S1"])))
        .on_edit(Ok(OperationOutcome::failed("canvas_editing_failed")));
    let workflow = workflow(api);

    let notification = workflow
        .submit(edit("U1", "F1", "Plan"))
        .await
        .expect("delivered");

    assert_eq!(notification.status, NotificationStatus::Failure);
    assert!(notification.text.contains("Failed to update canvas"));
    assert!(notification.text.contains("canvas_editing_failed"));
}

fn sections_failed(error: &str) -> canvas_bot::canvas::SectionLookup {
    canvas_bot::canvas::SectionLookup {
        outcome: OperationOutcome::failed(error),
        sections: Vec::new(),
    }
}
