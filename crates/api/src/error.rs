use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use linework_core::error::CoreError;
use linework_gemini::GeminiError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error
/// responses carrying a `detail` message and a stable `code` tag.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `linework_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A generative-model client error.
    #[error("Gemini error: {0}")]
    Gemini(#[from] GeminiError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, detail) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Configuration(msg) => {
                    tracing::error!(error = %msg, "Configuration error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "CONFIGURATION_ERROR",
                        "Service is misconfigured".to_string(),
                    )
                }
                CoreError::ExternalService(msg) => {
                    tracing::error!(error = %msg, "External service error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "EXTERNAL_SERVICE_ERROR",
                        "Failed to generate tutorial".to_string(),
                    )
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Generative-model errors ---
            AppError::Gemini(err) => classify_gemini_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "detail": detail,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and detail.
///
/// `RowNotFound` maps to 404; everything else maps to 500 with a
/// sanitized message, the original error logged.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// Classify a Gemini client error.
///
/// A missing API key is a configuration problem; everything else is an
/// external-service failure. Both surface as a 500 with a generic
/// detail, the full error logged.
fn classify_gemini_error(err: &GeminiError) -> (StatusCode, &'static str, String) {
    match err {
        GeminiError::MissingApiKey => {
            tracing::error!("No Gemini API key configured and none supplied with the request");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIGURATION_ERROR",
                "Gemini API key is not configured".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Gemini request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "EXTERNAL_SERVICE_ERROR",
                "Failed to generate tutorial".to_string(),
            )
        }
    }
}
