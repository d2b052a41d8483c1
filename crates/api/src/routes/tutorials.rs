//! Route definitions for tutorials.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::tutorials;
use crate::state::AppState;

/// Routes mounted at `/tutorials`.
///
/// ```text
/// GET  /              -> list
/// POST /generate      -> generate
/// POST /upload-image  -> upload_image
/// GET  /{id}          -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tutorials::list))
        .route("/generate", post(tutorials::generate))
        .route("/upload-image", post(tutorials::upload_image))
        .route("/{id}", get(tutorials::get_by_id))
}
