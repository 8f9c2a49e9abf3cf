//! Canvas Bot Core - Shared document types.
//!
//! This crate provides the value types exchanged between the bot and the
//! Slack canvases API:
//! - identifiers for canvases, sections and users
//! - create, lookup and edit request shapes
//! - the [`OperationOutcome`] every remote call resolves to
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. Everything
//! here is an immutable value built fresh for a single submission.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, canvas request types and outcomes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
