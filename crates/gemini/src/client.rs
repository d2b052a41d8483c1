//! HTTP client for the two model interactions.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::protocol::{GenerateContentRequest, GenerateContentResponse, Part};
use crate::{DEFAULT_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_VISION_MODEL};

/// Fixed instruction for subject extraction.
const EXTRACT_SUBJECT_INSTRUCTION: &str = "\
Analyze this image and identify the main subject in 2-5 words.
Focus on what would be the primary drawing subject.
Examples: \"a sleeping cat\", \"mountain landscape\", \"bowl of fruit\", \"vintage car\"
Just return the subject description, nothing else.";

/// Errors from the Gemini REST layer.
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Gemini API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// No API key was supplied with the call and no default is configured.
    #[error("No Gemini API key available")]
    MissingApiKey,

    /// A response payload could not be decoded.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The model returned no usable content.
    #[error("Empty response from model")]
    EmptyResponse,
}

/// A generated image plus the filename it should be stored under.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
    pub filename: String,
}

/// Client for the Gemini `generateContent` endpoints.
///
/// Holds only immutable configuration; credentials and model overrides
/// are per-call arguments.
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    default_api_key: Option<String>,
}

impl GeminiClient {
    /// Create a client against the production API.
    ///
    /// * `default_api_key` - process-wide key used when a call carries
    ///   no override; `None` means every call must supply its own.
    pub fn new(default_api_key: Option<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL.to_string(), default_api_key)
    }

    /// Create a client against a specific base URL (tests, proxies).
    pub fn with_base_url(base_url: String, default_api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            default_api_key,
        }
    }

    /// Identify the main drawing subject of an image.
    ///
    /// Sends the photo plus a fixed instruction to the vision model and
    /// returns the short phrase the model answers with.
    pub async fn extract_subject(
        &self,
        image_bytes: &[u8],
        api_key: Option<&str>,
    ) -> Result<String, GeminiError> {
        let request = GenerateContentRequest::single_turn(vec![
            Part::text(EXTRACT_SUBJECT_INSTRUCTION),
            Part::inline_png(image_bytes),
        ]);

        let response = self
            .generate_content(DEFAULT_VISION_MODEL, &request, api_key)
            .await?;

        let subject = response.first_text().ok_or(GeminiError::EmptyResponse)?;
        tracing::info!(subject = %subject, "Extracted drawing subject");
        Ok(subject)
    }

    /// Generate the four-panel tutorial image.
    ///
    /// Sends the prompt plus the grid template to the image model. If
    /// the response carries no inline image payload, the grid template
    /// bytes are returned unchanged so the caller always receives an
    /// image.
    pub async fn generate_tutorial_image(
        &self,
        prompt: &str,
        grid_template: &[u8],
        model: Option<&str>,
        api_key: Option<&str>,
    ) -> Result<GeneratedImage, GeminiError> {
        let model = model.unwrap_or(DEFAULT_IMAGE_MODEL);
        let request = GenerateContentRequest::single_turn(vec![
            Part::text(prompt),
            Part::inline_png(grid_template),
        ]);

        let response = self.generate_content(model, &request, api_key).await?;
        let bytes = tutorial_image_bytes(&response, grid_template)?;
        let filename = format!("tutorial_{}.png", uuid::Uuid::new_v4().simple());

        Ok(GeneratedImage { bytes, filename })
    }

    async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
        api_key: Option<&str>,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let key = self.resolve_key(api_key)?;
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(GeminiError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<GenerateContentResponse>().await?)
    }

    /// Per-call override first, then the process default. Empty strings
    /// count as absent.
    fn resolve_key<'a>(&'a self, override_key: Option<&'a str>) -> Result<&'a str, GeminiError> {
        override_key
            .filter(|k| !k.trim().is_empty())
            .or_else(|| {
                self.default_api_key
                    .as_deref()
                    .filter(|k| !k.trim().is_empty())
            })
            .ok_or(GeminiError::MissingApiKey)
    }
}

/// Pick the image bytes out of a generation response, falling back to
/// the grid template when the model returned no image payload.
fn tutorial_image_bytes(
    response: &GenerateContentResponse,
    grid_template: &[u8],
) -> Result<Vec<u8>, GeminiError> {
    match response.first_inline_data() {
        Some(inline) => BASE64
            .decode(inline.data.as_bytes())
            .map_err(|e| GeminiError::Decode(format!("Invalid inline image data: {e}"))),
        None => {
            tracing::warn!("No image returned from model, using grid template as fallback");
            Ok(grid_template.to_vec())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_json(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn override_key_wins_over_default() {
        let client = GeminiClient::new(Some("default-key".to_string()));
        assert_eq!(client.resolve_key(Some("caller-key")).unwrap(), "caller-key");
    }

    #[test]
    fn default_key_used_when_no_override() {
        let client = GeminiClient::new(Some("default-key".to_string()));
        assert_eq!(client.resolve_key(None).unwrap(), "default-key");
    }

    #[test]
    fn empty_override_falls_back_to_default() {
        let client = GeminiClient::new(Some("default-key".to_string()));
        assert_eq!(client.resolve_key(Some("  ")).unwrap(), "default-key");
    }

    #[test]
    fn no_key_anywhere_is_a_configuration_failure() {
        let client = GeminiClient::new(None);
        assert!(matches!(
            client.resolve_key(None),
            Err(GeminiError::MissingApiKey)
        ));
    }

    #[test]
    fn inline_payload_is_decoded() {
        let response = response_json(serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{ "inlineData": { "mimeType": "image/png", "data": "cG5nLWJ5dGVz" } }]
                }
            }]
        }));
        let bytes = tutorial_image_bytes(&response, b"grid").unwrap();
        assert_eq!(bytes, b"png-bytes");
    }

    #[test]
    fn missing_payload_falls_back_to_grid_template_exactly() {
        let response = response_json(serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": "no image, sorry" }] }
            }]
        }));
        let grid = b"grid-template-bytes";
        let bytes = tutorial_image_bytes(&response, grid).unwrap();
        assert_eq!(bytes, grid);
    }

    #[test]
    fn corrupt_inline_payload_is_a_decode_error() {
        let response = response_json(serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{ "inlineData": { "mimeType": "image/png", "data": "!!not-base64!!" } }]
                }
            }]
        }));
        assert!(matches!(
            tutorial_image_bytes(&response, b"grid"),
            Err(GeminiError::Decode(_))
        ));
    }
}
