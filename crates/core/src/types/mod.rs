//! Core types for the canvas bot.
//!
//! This module provides type-safe wrappers for canvas domain concepts.

pub mod canvas;
pub mod id;
pub mod outcome;
pub mod submission;

pub use canvas::{
    AccessLevel, DocumentContent, DocumentCreateRequest, DocumentRef, EditChange, EditOperation,
    SectionCriteria, SectionQuery, SectionRef,
};
pub use id::*;
pub use outcome::{OperationOutcome, UNKNOWN_ERROR};
pub use submission::{CanvasSubmission, CreateSubmission, EditSubmission};
