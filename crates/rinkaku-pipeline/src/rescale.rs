//! Conversion of floating-point filter intermediates to displayable
//! 8-bit rasters.
//!
//! Gradient and Laplacian responses are signed and unbounded, so they
//! are carried at f32 precision and only collapsed to `u8` at the end
//! of each filter: either saturating on the true magnitude
//! ([`abs_saturate`]) or rescaling the observed range ([`min_max_normalize`]).

use image::GrayImage;

use crate::types::GrayImageF32;

/// Lift an 8-bit raster to floating point ahead of gradient filtering.
#[must_use = "returns the floating-point image"]
pub fn to_f32(image: &GrayImage) -> GrayImageF32 {
    GrayImageF32::from_fn(image.width(), image.height(), |x, y| {
        image::Luma([f32::from(image.get_pixel(x, y).0[0])])
    })
}

/// Round a floating-point sample into the displayable 8-bit range.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn saturate_u8(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Absolute value with saturating 8-bit conversion.
///
/// Strong responses pin at 255 rather than rescaling the range, so the
/// output reflects true gradient magnitude up to the display ceiling.
#[must_use = "returns the converted image"]
pub fn abs_saturate(image: &GrayImageF32) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        image::Luma([saturate_u8(image.get_pixel(x, y).0[0].abs())])
    })
}

/// Linearly rescale the full value range present in `image` to [0,255].
///
/// A flat raster (max == min) has no range to stretch; the output is
/// defined as all-zero instead of dividing by zero.
#[must_use = "returns the normalized image"]
pub fn min_max_normalize(image: &GrayImageF32) -> GrayImage {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for pixel in image.pixels() {
        let v = pixel.0[0];
        min = min.min(v);
        max = max.max(v);
    }

    let range = max - min;
    if range <= 0.0 {
        return GrayImage::new(image.width(), image.height());
    }

    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let v = image.get_pixel(x, y).0[0];
        image::Luma([saturate_u8((v - min) * 255.0 / range)])
    })
}
