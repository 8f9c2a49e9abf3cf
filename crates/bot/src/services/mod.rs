//! Business logic services for the bot.
//!
//! # Services
//!
//! - `canvas_workflow` - Create and update canvases from modal submissions
//! - `notifier` - Outcome delivery to the submitting user

pub mod canvas_workflow;
pub mod notifier;

pub use canvas_workflow::{CanvasWorkflow, Notification, NotificationStatus};
pub use notifier::Notifier;
