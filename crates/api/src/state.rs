use std::sync::Arc;

use linework_db::Store;
use linework_gemini::GeminiClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`) and read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Persistent store, possibly degraded to `Disconnected`.
    pub store: Store,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Client for the generative-model API.
    pub gemini: Arc<GeminiClient>,
}
