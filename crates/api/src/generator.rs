//! Tutorial orchestration.
//!
//! The one meaningful control-flow decision in the system lives here:
//! image input is stored and run through subject extraction, topic
//! input names the subject directly. Everything after that is common --
//! build the prompt, generate the image, write it to disk, persist a
//! row when the store is connected, and assemble the response.

use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use linework_core::error::CoreError;
use linework_core::media;
use linework_core::pagination;
use linework_core::prompt::tutorial_prompt;
use linework_core::steps::{tutorial_steps, Step};
use linework_core::types::{InputType, Timestamp, TutorialId};
use linework_core::upload::validate_upload_size;
use linework_db::models::tutorial::{CreateTutorial, Tutorial};
use linework_db::repositories::TutorialRepo;
use linework_gemini::GeneratedImage;
use serde::{Deserialize, Serialize};

use crate::config::ServerConfig;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body of `POST /tutorials/generate`.
#[derive(Debug, Deserialize)]
pub struct GenerateTutorialRequest {
    pub input_type: InputType,
    /// Drawing topic; required when `input_type` is `topic`.
    pub topic: Option<String>,
    /// Base64-encoded source image; required when `input_type` is `image`.
    pub image: Option<String>,
    /// Caller-supplied Gemini API key, overriding the configured default.
    pub api_key: Option<String>,
    /// Image-generation model override.
    pub model: Option<String>,
}

/// Full tutorial response body.
#[derive(Debug, Serialize)]
pub struct TutorialResponse {
    pub tutorial_id: TutorialId,
    pub subject: String,
    pub tutorial_image_url: String,
    pub steps: Vec<Step>,
    pub created_at: Timestamp,
}

/// One entry of the paginated history listing.
#[derive(Debug, Serialize)]
pub struct TutorialListItem {
    pub tutorial_id: TutorialId,
    pub subject: String,
    /// The full tutorial image doubles as the thumbnail for now.
    pub thumbnail_url: String,
    pub created_at: Timestamp,
}

/// Paginated history listing.
#[derive(Debug, Serialize)]
pub struct TutorialListResponse {
    pub tutorials: Vec<TutorialListItem>,
    pub total: i64,
    pub page: i64,
    pub pages: i64,
}

/// Request input after shape validation: either the topic text or the
/// decoded image bytes.
#[derive(Debug)]
enum ResolvedInput {
    Topic(String),
    Image(Vec<u8>),
}

/// Validate field presence, base64 decoding, and the size ceiling.
fn validate_request(
    request: &GenerateTutorialRequest,
    max_upload_size: usize,
) -> Result<ResolvedInput, CoreError> {
    match request.input_type {
        InputType::Topic => {
            let topic = request
                .topic
                .as_deref()
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .ok_or_else(|| {
                    CoreError::Validation("Topic is required for topic input type".to_string())
                })?;
            Ok(ResolvedInput::Topic(topic.to_string()))
        }
        InputType::Image => {
            let image = request
                .image
                .as_deref()
                .filter(|i| !i.is_empty())
                .ok_or_else(|| {
                    CoreError::Validation("Image is required for image input type".to_string())
                })?;
            let bytes = BASE64
                .decode(image.as_bytes())
                .map_err(|e| CoreError::Validation(format!("Invalid base64 image data: {e}")))?;
            validate_upload_size(bytes.len(), max_upload_size)?;
            Ok(ResolvedInput::Image(bytes))
        }
    }
}

/// Generate a new drawing tutorial.
pub async fn generate(
    state: &AppState,
    request: &GenerateTutorialRequest,
) -> AppResult<TutorialResponse> {
    let input = validate_request(request, state.config.max_upload_size)?;

    let (subject, original_image_url) = match input {
        ResolvedInput::Topic(topic) => (topic, None),
        ResolvedInput::Image(bytes) => {
            let url = save_original_image(&state.config, &bytes).await?;
            let subject = state
                .gemini
                .extract_subject(&bytes, request.api_key.as_deref())
                .await?;
            (subject, Some(url))
        }
    };

    let prompt = tutorial_prompt(&subject, request.input_type);
    let grid_template = load_grid_template(&state.config).await?;

    let generated = state
        .gemini
        .generate_tutorial_image(
            &prompt,
            &grid_template,
            request.model.as_deref(),
            request.api_key.as_deref(),
        )
        .await?;

    let tutorial_image_url = save_tutorial_image(&state.config, &generated).await?;

    let steps = tutorial_steps();
    let tutorial_id = TutorialId::new_v4();
    let created_at = chrono::Utc::now();

    match state.store.pool() {
        Some(pool) => {
            let row = CreateTutorial {
                id: tutorial_id,
                user_id: None,
                input_type: request.input_type.as_str().to_string(),
                subject: subject.clone(),
                original_image_url,
                tutorial_image_url: tutorial_image_url.clone(),
                prompt,
                steps: serde_json::to_value(&steps)
                    .map_err(|e| AppError::InternalError(format!("Failed to encode steps: {e}")))?,
                created_at,
            };
            TutorialRepo::insert(pool, &row).await?;
        }
        None => {
            tracing::warn!("Store disconnected - tutorial will not be saved to history");
        }
    }

    Ok(TutorialResponse {
        tutorial_id,
        subject,
        tutorial_image_url,
        steps,
        created_at,
    })
}

/// Look up a tutorial by ID.
///
/// `None` covers both "not stored" and "store disconnected"; the
/// handler maps it to 404.
pub async fn get(state: &AppState, id: TutorialId) -> AppResult<Option<TutorialResponse>> {
    let Some(pool) = state.store.pool() else {
        tracing::warn!("Store disconnected - cannot retrieve tutorial");
        return Ok(None);
    };

    let Some(row) = TutorialRepo::find_by_id(pool, id).await? else {
        return Ok(None);
    };

    Ok(Some(response_from_row(row)?))
}

/// Paginated history, newest first. A disconnected store yields an
/// empty page rather than an error.
pub async fn list(state: &AppState, page: i64, limit: i64) -> AppResult<TutorialListResponse> {
    let Some(pool) = state.store.pool() else {
        tracing::warn!("Store disconnected - returning empty tutorial list");
        return Ok(TutorialListResponse {
            tutorials: Vec::new(),
            total: 0,
            page,
            pages: 0,
        });
    };

    let total = TutorialRepo::count(pool).await?;
    let rows = TutorialRepo::list_page(pool, limit, pagination::page_offset(page, limit)).await?;

    let tutorials = rows
        .into_iter()
        .map(|row| TutorialListItem {
            tutorial_id: row.id,
            subject: row.subject,
            thumbnail_url: row.tutorial_image_url,
            created_at: row.created_at,
        })
        .collect();

    Ok(TutorialListResponse {
        tutorials,
        total,
        page,
        pages: pagination::total_pages(total, limit),
    })
}

fn response_from_row(row: Tutorial) -> Result<TutorialResponse, AppError> {
    let steps: Vec<Step> = serde_json::from_value(row.steps)
        .map_err(|e| AppError::InternalError(format!("Corrupt steps payload: {e}")))?;

    Ok(TutorialResponse {
        tutorial_id: row.id,
        subject: row.subject,
        tutorial_image_url: row.tutorial_image_url,
        steps,
        created_at: row.created_at,
    })
}

/// Normalize the uploaded image to PNG and store it, returning its
/// public URL path.
async fn save_original_image(config: &ServerConfig, bytes: &[u8]) -> Result<String, AppError> {
    let png = media::reencode_png(bytes)?;

    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;

    let filename = format!("original_{}.png", uuid::Uuid::new_v4().simple());
    let path = Path::new(&config.upload_dir).join(&filename);
    tokio::fs::write(&path, &png)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store original image: {e}")))?;

    Ok(format!("/static/uploads/{filename}"))
}

/// Store the generated tutorial image, returning its public URL path.
async fn save_tutorial_image(
    config: &ServerConfig,
    image: &GeneratedImage,
) -> Result<String, AppError> {
    tokio::fs::create_dir_all(&config.tutorial_dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create tutorial dir: {e}")))?;

    let path = Path::new(&config.tutorial_dir).join(&image.filename);
    tokio::fs::write(&path, &image.bytes)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store tutorial image: {e}")))?;

    Ok(format!("/static/tutorials/{}", image.filename))
}

/// Read the grid template, rendering and persisting the default
/// four-quadrant grid on first use if the configured file is missing.
async fn load_grid_template(config: &ServerConfig) -> Result<Vec<u8>, AppError> {
    match tokio::fs::read(&config.grid_template_path).await {
        Ok(bytes) => Ok(bytes),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            let bytes = media::default_grid_template()?;
            let path = Path::new(&config.grid_template_path);
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::InternalError(format!("Failed to create grid dir: {e}"))
                })?;
            }
            tokio::fs::write(path, &bytes)
                .await
                .map_err(|e| AppError::InternalError(format!("Failed to store grid: {e}")))?;
            tracing::info!(path = %config.grid_template_path, "Rendered default grid template");
            Ok(bytes)
        }
        Err(e) => Err(AppError::InternalError(format!(
            "Failed to read grid template: {e}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(input_type: InputType) -> GenerateTutorialRequest {
        GenerateTutorialRequest {
            input_type,
            topic: None,
            image: None,
            api_key: None,
            model: None,
        }
    }

    #[test]
    fn topic_input_requires_a_topic() {
        let mut req = request(InputType::Topic);
        assert!(validate_request(&req, 1024).is_err());

        req.topic = Some("   ".to_string());
        assert!(validate_request(&req, 1024).is_err());

        req.topic = Some("a red fox".to_string());
        match validate_request(&req, 1024).unwrap() {
            ResolvedInput::Topic(topic) => assert_eq!(topic, "a red fox"),
            ResolvedInput::Image(_) => panic!("expected topic input"),
        }
    }

    #[test]
    fn image_input_requires_an_image() {
        let req = request(InputType::Image);
        assert!(validate_request(&req, 1024).is_err());
    }

    #[test]
    fn image_input_rejects_invalid_base64() {
        let mut req = request(InputType::Image);
        req.image = Some("!!not base64!!".to_string());
        assert!(validate_request(&req, 1024).is_err());
    }

    #[test]
    fn image_at_size_ceiling_is_accepted_and_one_over_rejected() {
        let mut req = request(InputType::Image);

        req.image = Some(BASE64.encode(vec![0u8; 1024]));
        assert!(validate_request(&req, 1024).is_ok());

        req.image = Some(BASE64.encode(vec![0u8; 1025]));
        let err = validate_request(&req, 1024).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum allowed size"));
    }

    #[test]
    fn topic_input_ignores_size_ceiling() {
        let mut req = request(InputType::Topic);
        req.topic = Some("a very long and detailed topic".to_string());
        assert!(validate_request(&req, 1).is_ok());
    }

    #[test]
    fn stored_row_maps_back_to_the_original_response_fields() {
        let steps = tutorial_steps();
        let created_at = chrono::Utc::now();
        let id = TutorialId::new_v4();

        let row = Tutorial {
            id,
            user_id: None,
            input_type: "topic".to_string(),
            subject: "a red fox".to_string(),
            original_image_url: None,
            tutorial_image_url: "/static/tutorials/tutorial_abc.png".to_string(),
            prompt: "prompt text".to_string(),
            steps: serde_json::to_value(&steps).unwrap(),
            created_at,
            updated_at: created_at,
        };

        let response = response_from_row(row).unwrap();
        assert_eq!(response.tutorial_id, id);
        assert_eq!(response.subject, "a red fox");
        assert_eq!(
            response.tutorial_image_url,
            "/static/tutorials/tutorial_abc.png"
        );
        assert_eq!(response.steps, steps);
        assert_eq!(response.created_at, created_at);
    }

    #[test]
    fn corrupt_steps_payload_is_an_internal_error() {
        let created_at = chrono::Utc::now();
        let row = Tutorial {
            id: TutorialId::new_v4(),
            user_id: None,
            input_type: "topic".to_string(),
            subject: "subject".to_string(),
            original_image_url: None,
            tutorial_image_url: "/static/tutorials/t.png".to_string(),
            prompt: "prompt".to_string(),
            steps: serde_json::json!({ "not": "a step list" }),
            created_at,
            updated_at: created_at,
        };

        assert!(matches!(
            response_from_row(row),
            Err(AppError::InternalError(_))
        ));
    }
}
