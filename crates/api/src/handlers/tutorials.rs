//! Handlers for the `/tutorials` resource.

use axum::extract::{Multipart, Path, Query, State};
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use linework_core::error::CoreError;
use linework_core::types::TutorialId;
use linework_core::upload::{validate_image_content_type, validate_upload_size};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::generator::{self, GenerateTutorialRequest, TutorialListResponse, TutorialResponse};
use crate::state::AppState;

/// Query parameters for the paginated history listing.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Response of the multipart upload convenience endpoint.
#[derive(Debug, Serialize)]
pub struct UploadImageResponse {
    /// Base64-encoded file content, ready for the generate endpoint.
    pub image: String,
}

/// POST /api/{version}/tutorials/generate
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateTutorialRequest>,
) -> AppResult<Json<TutorialResponse>> {
    let tutorial = generator::generate(&state, &request).await?;
    Ok(Json(tutorial))
}

/// GET /api/{version}/tutorials?page=&limit=
///
/// Pages are 1-based; `limit` is capped at 50.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<TutorialListResponse>> {
    let page = params.page.unwrap_or(1);
    let limit = params.limit.unwrap_or(10);

    if page < 1 {
        return Err(AppError::BadRequest("page must be >= 1".to_string()));
    }
    if !(1..=50).contains(&limit) {
        return Err(AppError::BadRequest(
            "limit must be between 1 and 50".to_string(),
        ));
    }

    let listing = generator::list(&state, page, limit).await?;
    Ok(Json(listing))
}

/// GET /api/{version}/tutorials/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<TutorialId>,
) -> AppResult<Json<TutorialResponse>> {
    let tutorial = generator::get(&state, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tutorial",
            id,
        }))?;
    Ok(Json(tutorial))
}

/// POST /api/{version}/tutorials/upload-image
///
/// Accepts a multipart file and returns it base64-encoded for reuse
/// with the generate endpoint. Pure transcoding; nothing is stored.
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadImageResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let content_type = field.content_type().unwrap_or_default().to_string();
        validate_image_content_type(&content_type)?;

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        validate_upload_size(data.len(), state.config.max_upload_size)?;

        return Ok(Json(UploadImageResponse {
            image: BASE64.encode(&data),
        }));
    }

    Err(AppError::BadRequest(
        "No file received in multipart upload".to_string(),
    ))
}
