//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health               - Liveness check
//! POST /slack/commands       - Slash commands (signed)
//! POST /slack/interactions   - Modal submissions (signed)
//! ```

pub mod slack;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Build the application routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .merge(slack::router())
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check Slack.
async fn health() -> &'static str {
    "ok"
}
