use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Request, Response};
use axum::routing::post;
use axum::{Json, Router};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use linework_api::config::ServerConfig;
use linework_api::router::build_app_router;
use linework_api::state::AppState;
use linework_db::Store;
use linework_gemini::GeminiClient;

/// A test application plus the temporary directory backing its storage
/// paths. Keep the struct alive for the duration of the test -- the
/// directory is removed on drop.
pub struct TestApp {
    pub router: Router,
    pub config: ServerConfig,
    #[allow(dead_code)]
    dir: TempDir,
}

/// Build a test `ServerConfig` rooted in a fresh temporary directory.
pub fn test_config(dir: &TempDir, max_upload_size: usize) -> ServerConfig {
    let root = dir.path();
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        gemini_api_key: Some("test-key".to_string()),
        upload_dir: root.join("uploads").to_string_lossy().to_string(),
        tutorial_dir: root.join("tutorials").to_string_lossy().to_string(),
        grid_template_path: root.join("grids/grid.png").to_string_lossy().to_string(),
        api_version: "v1".to_string(),
        max_upload_size,
    }
}

/// Build the application with a disconnected store and a Gemini client
/// pointing at `gemini_base_url`.
///
/// The disconnected store means no database is needed; it also
/// exercises the degraded mode every store access must handle.
pub fn build_test_app_with(gemini_base_url: &str, max_upload_size: usize) -> TestApp {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = test_config(&dir, max_upload_size);

    let gemini = GeminiClient::with_base_url(
        gemini_base_url.to_string(),
        config.gemini_api_key.clone(),
    );

    let state = AppState {
        store: Store::Disconnected,
        config: Arc::new(config.clone()),
        gemini: Arc::new(gemini),
    };

    TestApp {
        router: build_app_router(state, &config),
        config,
        dir,
    }
}

/// Build the application with the model endpoint pointing at a closed
/// port, for tests that never reach (or must fail to reach) the model.
pub fn build_test_app() -> TestApp {
    build_test_app_with("http://127.0.0.1:9", 5 * 1024 * 1024)
}

/// Build the application with no API key configured anywhere, for
/// exercising the configuration-error path.
pub fn build_test_app_without_api_key() -> TestApp {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = test_config(&dir, 5 * 1024 * 1024);
    config.gemini_api_key = None;

    let gemini = GeminiClient::with_base_url("http://127.0.0.1:9".to_string(), None);

    let state = AppState {
        store: Store::Disconnected,
        config: Arc::new(config.clone()),
        gemini: Arc::new(gemini),
    };

    TestApp {
        router: build_app_router(state, &config),
        config,
        dir,
    }
}

/// Spawn a mock Gemini server answering every `generateContent` call
/// with the given JSON body. Returns its base URL.
pub async fn spawn_mock_gemini(response: serde_json::Value) -> String {
    let app = Router::new().route(
        "/models/{model}",
        post(move || {
            let response = response.clone();
            async move { Json(response) }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock server");
    let addr = listener.local_addr().expect("Mock server has no address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock server error");
    });

    format!("http://{addr}")
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request"),
    )
    .await
    .expect("Request failed")
}

/// Issue a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request"),
    )
    .await
    .expect("Request failed")
}

/// Issue a POST request with a single-file multipart body.
pub async fn post_multipart(
    app: Router,
    uri: &str,
    filename: &str,
    content_type: &str,
    bytes: &[u8],
) -> Response<Body> {
    let boundary = "linework-test-boundary";

    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{boundary}\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\n\
             Content-Type: {content_type}\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .expect("Failed to build request"),
    )
    .await
    .expect("Request failed")
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("Body is not valid JSON")
}
