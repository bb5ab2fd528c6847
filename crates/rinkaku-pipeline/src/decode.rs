//! Image decoding at the pipeline boundary.
//!
//! Accepts raw encoded bytes (PNG, JPEG, BMP, WebP) and produces the
//! R,G,B raster the color adapter expects. The grayscale collapse stays
//! inside each filter, so the decoded color raster is what crosses this
//! boundary.

use image::RgbImage;

use crate::types::PipelineError;

/// Decode raw image bytes into an R,G,B raster.
///
/// Supports whatever formats the `image` crate can decode (PNG, JPEG,
/// BMP, WebP here). Alpha, if present, is dropped.
///
/// # Errors
///
/// Returns [`PipelineError::EmptyInput`] if `bytes` is empty.
/// Returns [`PipelineError::ImageDecode`] if the image format is
/// unrecognized or the data is corrupt.
pub fn decode_to_rgb(bytes: &[u8]) -> Result<RgbImage, PipelineError> {
    if bytes.is_empty() {
        return Err(PipelineError::EmptyInput);
    }

    let img = image::load_from_memory(bytes)?;
    Ok(img.to_rgb8())
}
