//! REST client for the Google Gemini `generateContent` endpoint.
//!
//! Wraps the two model interactions the service needs -- subject
//! extraction from a photo and four-panel tutorial image generation --
//! using [`reqwest`]. Credentials are resolved per call (caller-supplied
//! override, then the configured process default); there is no mutable
//! client state, so concurrent requests with different keys stay
//! isolated.

pub mod client;
pub mod protocol;

pub use client::{GeminiClient, GeminiError, GeneratedImage};
pub use protocol::{Candidate, Content, GenerateContentRequest, GenerateContentResponse, InlineData, Part};

/// Production API base URL.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for subject extraction from an uploaded photo.
pub const DEFAULT_VISION_MODEL: &str = "gemini-2.0-flash-exp";

/// Model used for tutorial image generation.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
