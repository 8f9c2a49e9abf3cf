//! Slack canvas bot library.
//!
//! Serves Slack slash commands that open canvas forms, and turns submitted
//! forms into calls against the Slack canvases API. Outcomes are sent to
//! the user picked in the form as a direct message.
//!
//! # Modules
//!
//! - `canvas` - canvases API seam and section resolution
//! - `services` - create and update workflows, notification sink
//! - `slack` - Web API client, Block Kit types, modal forms
//! - `routes` - axum handlers for Slack webhooks

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod canvas;
pub mod config;
pub mod error;
pub mod routes;
pub mod services;
pub mod slack;
pub mod state;
