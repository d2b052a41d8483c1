//! Shared domain types and static content for the drawing-tutorial service.
//!
//! This crate is the leaf of the workspace: domain errors, the fixed
//! four-step tutorial sequence, the prompt templates sent to the
//! generation model, and the pure validation/encoding helpers used by
//! the HTTP layer.

pub mod error;
pub mod media;
pub mod pagination;
pub mod prompt;
pub mod steps;
pub mod types;
pub mod upload;
