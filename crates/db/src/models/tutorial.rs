//! Tutorial entity model and DTOs.

use linework_core::types::{Timestamp, TutorialId};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `tutorials` table.
///
/// Rows are written once at generation time and never updated; there is
/// no edit or delete path.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tutorial {
    pub id: TutorialId,
    /// Reserved for future multi-user support; always NULL today.
    pub user_id: Option<String>,
    pub input_type: String,
    pub subject: String,
    /// Stored source image, set only for image input.
    pub original_image_url: Option<String>,
    pub tutorial_image_url: String,
    /// Exact prompt sent to the generation model, kept for auditability.
    pub prompt: String,
    /// The fixed four-step sequence, stored as JSONB.
    pub steps: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new tutorial.
///
/// `created_at` is supplied by the caller so the response body and the
/// persisted row carry the same timestamp.
#[derive(Debug, Clone)]
pub struct CreateTutorial {
    pub id: TutorialId,
    pub user_id: Option<String>,
    pub input_type: String,
    pub subject: String,
    pub original_image_url: Option<String>,
    pub tutorial_image_url: String,
    pub prompt: String,
    pub steps: serde_json::Value,
    pub created_at: Timestamp,
}
