//! Image decode/re-encode and grid-template rendering.
//!
//! The only pixel work the service does: uploaded photos are normalized
//! to PNG before storage, and the four-quadrant grid template can be
//! rendered from scratch when the configured file does not exist yet.

use std::io::Cursor;

use image::{ImageFormat, Rgb, RgbImage};

use crate::error::CoreError;

/// Default grid template edge length in pixels.
pub const GRID_SIZE: u32 = 800;

/// Default divider line width in pixels.
pub const GRID_LINE_WIDTH: u32 = 2;

/// Decode uploaded image bytes (PNG/JPEG/WebP) and re-encode as PNG.
///
/// Decode failure means the caller sent something that is not an image,
/// so it surfaces as a validation error.
pub fn reencode_png(bytes: &[u8]) -> Result<Vec<u8>, CoreError> {
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| CoreError::Validation(format!("Invalid image data: {e}")))?;

    let mut out = Cursor::new(Vec::new());
    decoded
        .write_to(&mut out, ImageFormat::Png)
        .map_err(|e| CoreError::Internal(format!("Failed to encode PNG: {e}")))?;
    Ok(out.into_inner())
}

/// Render a four-quadrant grid template: white background, one vertical
/// and one horizontal black divider through the center.
pub fn render_grid_template(
    width: u32,
    height: u32,
    line_width: u32,
) -> Result<Vec<u8>, CoreError> {
    let mut img = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));

    let black = Rgb([0, 0, 0]);
    let x_start = (width / 2).saturating_sub(line_width / 2);
    let y_start = (height / 2).saturating_sub(line_width / 2);

    for x in x_start..(x_start + line_width).min(width) {
        for y in 0..height {
            img.put_pixel(x, y, black);
        }
    }
    for y in y_start..(y_start + line_width).min(height) {
        for x in 0..width {
            img.put_pixel(x, y, black);
        }
    }

    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)
        .map_err(|e| CoreError::Internal(format!("Failed to encode grid template: {e}")))?;
    Ok(out.into_inner())
}

/// The standard 800x800 grid template.
pub fn default_grid_template() -> Result<Vec<u8>, CoreError> {
    render_grid_template(GRID_SIZE, GRID_SIZE, GRID_LINE_WIDTH)
}
