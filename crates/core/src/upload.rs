//! Upload validation: MIME-type prefix and size ceiling.

use crate::error::CoreError;

/// Default upload size ceiling: 5 MiB.
pub const DEFAULT_MAX_UPLOAD_SIZE: usize = 5 * 1024 * 1024;

/// Validate that an uploaded file declares an image MIME type.
pub fn validate_image_content_type(content_type: &str) -> Result<(), CoreError> {
    if content_type.starts_with("image/") {
        Ok(())
    } else {
        Err(CoreError::Validation("File must be an image".to_string()))
    }
}

/// Validate that a decoded payload fits within the configured ceiling.
pub fn validate_upload_size(size: usize, max_size: usize) -> Result<(), CoreError> {
    if size <= max_size {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Image size exceeds maximum allowed size of {:.1}MB",
            max_size as f64 / (1024.0 * 1024.0)
        )))
    }
}
