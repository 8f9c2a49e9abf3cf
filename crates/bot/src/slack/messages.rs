//! Message builders for canvas outcome notifications.
//!
//! Notifications are plain mrkdwn text delivered as a direct message to the
//! user picked in the form.

/// Deep link to a canvas in the Slack web client.
#[must_use]
pub fn canvas_url(workspace_host: &str, team_id: &str, canvas_id: &str) -> String {
    format!(
        "https://{}/docs/{team_id}/{canvas_id}",
        workspace_host.trim_end_matches('/')
    )
}

/// Notification for a created canvas.
#[must_use]
pub fn build_created_message(canvas_id: &str, title: &str, url: &str) -> String {
    format!("✅ Canvas created\nid: {canvas_id}\ntitle: {title}\nurl: {url}")
}

/// Notification for an updated canvas.
#[must_use]
pub fn build_updated_message(title: &str, url: &str) -> String {
    format!("✅ Canvas updated\ntitle: {title}\nurl: {url}")
}

/// Notification for a failed step.
///
/// `action` is a short verb phrase such as `"create canvas"`.
#[must_use]
pub fn build_failure_message(action: &str, error: &str) -> String {
    format!("⚠️ Failed to {action}: {error}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_url() {
        assert_eq!(
            canvas_url("acme.slack.com", "T05SD2E14R3", "F123"),
            "https://acme.slack.com/docs/T05SD2E14R3/F123"
        );
        assert_eq!(
            canvas_url("acme.slack.com/", "T1", "F1"),
            "https://acme.slack.com/docs/T1/F1"
        );
    }

    #[test]
    fn test_created_message_contains_id_and_title() {
        let text = build_created_message("C123", "Plan", "https://x/docs/T/C123");
        assert!(text.contains("C123"));
        assert!(text.contains("title: Plan"));
        assert!(text.contains("https://x/docs/T/C123"));
    }

    #[test]
    fn test_failure_message() {
        assert_eq!(
            build_failure_message("create canvas", "invalid_auth"),
            "⚠️ Failed to create canvas: invalid_auth"
        );
    }
}
