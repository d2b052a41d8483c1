pub mod health;
pub mod tutorials;

use axum::Router;

use crate::state::AppState;

/// Build the versioned API route tree (mounted under `/api/{version}`).
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/tutorials", tutorials::router())
}
