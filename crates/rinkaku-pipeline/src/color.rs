//! Color-space adapter: R,G,B ↔ B,G,R reordering and grayscale expansion.
//!
//! Decoders hand the pipeline R,G,B-ordered rasters while the filters
//! consume the B,G,R convention, so every upload passes through
//! [`rgb_to_bgr`] on the way in. On the way out, [`gray_to_rgb`] turns
//! single-channel filter output back into a displayable RGB raster and
//! [`bgr_to_rgb`] handles 3-channel intermediates.

use image::{GrayImage, RgbImage};

use crate::types::BgrImage;

/// Reorder a decoded R,G,B raster into the pipeline's B,G,R convention.
///
/// Shape is unchanged and the input is never mutated; the returned
/// raster is freshly allocated.
#[must_use = "returns the reordered image"]
pub fn rgb_to_bgr(image: &RgbImage) -> BgrImage {
    swap_red_blue(image)
}

/// Reorder a B,G,R raster back into R,G,B for display or encoding.
#[must_use = "returns the reordered image"]
pub fn bgr_to_rgb(image: &BgrImage) -> RgbImage {
    swap_red_blue(image)
}

/// Expand a single-channel raster into a visually gray RGB raster by
/// replicating the channel into R = G = B.
#[must_use = "returns the expanded image"]
pub fn gray_to_rgb(image: &GrayImage) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let v = image.get_pixel(x, y).0[0];
        image::Rgb([v, v, v])
    })
}

/// Swap the first and third channel of every pixel.
fn swap_red_blue(image: &RgbImage) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let [a, b, c] = image.get_pixel(x, y).0;
        image::Rgb([c, b, a])
    })
}
