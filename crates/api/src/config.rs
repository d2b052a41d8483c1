use linework_core::upload::DEFAULT_MAX_UPLOAD_SIZE;

/// Server configuration loaded from environment variables.
///
/// All fields except the Gemini API key have sensible defaults suitable
/// for local development. In production, override via environment
/// variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Process-wide Gemini API key. Optional: requests may carry their own.
    pub gemini_api_key: Option<String>,
    /// Directory for stored original uploads.
    pub upload_dir: String,
    /// Directory for generated tutorial images.
    pub tutorial_dir: String,
    /// Path of the four-quadrant grid template image.
    pub grid_template_path: String,
    /// API version tag used as the route prefix (`/api/{version}`).
    pub api_version: String,
    /// Upload size ceiling in bytes.
    pub max_upload_size: usize,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `8000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `GEMINI_API_KEY`       | (unset)                    |
    /// | `UPLOAD_DIR`           | `static/uploads`           |
    /// | `TUTORIAL_DIR`         | `static/tutorials`         |
    /// | `GRID_TEMPLATE_PATH`   | `static/grids/grid.png`    |
    /// | `API_VERSION`          | `v1`                       |
    /// | `MAX_UPLOAD_SIZE`      | `5242880` (5 MiB)          |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let gemini_api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "static/uploads".into());
        let tutorial_dir =
            std::env::var("TUTORIAL_DIR").unwrap_or_else(|_| "static/tutorials".into());
        let grid_template_path =
            std::env::var("GRID_TEMPLATE_PATH").unwrap_or_else(|_| "static/grids/grid.png".into());

        let api_version = std::env::var("API_VERSION").unwrap_or_else(|_| "v1".into());

        let max_upload_size: usize = std::env::var("MAX_UPLOAD_SIZE")
            .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_SIZE.to_string())
            .parse()
            .expect("MAX_UPLOAD_SIZE must be a valid usize");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            gemini_api_key,
            upload_dir,
            tutorial_dir,
            grid_template_path,
            api_version,
            max_upload_size,
        }
    }
}
