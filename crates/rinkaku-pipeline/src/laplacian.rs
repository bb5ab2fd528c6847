//! Laplacian second-derivative filter.
//!
//! Detects intensity discontinuities in all directions at once by
//! summing the horizontal and vertical second derivatives at
//! floating-point precision, then collapsing the absolute response to
//! a displayable 8-bit raster.

use image::GrayImage;
use imageproc::filter::separable_filter;

use crate::types::{BgrImage, GrayImageF32};
use crate::{grayscale, kernel, rescale};

/// Apply the discrete Laplacian operator.
///
/// The kernel size is normalized to odd before use; a size of 1 selects
/// the classic 3x3 cross stencil (no cross-axis smoothing). Output is
/// the absolute response with the same saturating conversion as the
/// single-axis Sobel case: strong responses pin at 255, nothing is
/// rescaled.
#[must_use = "returns the filtered image"]
pub fn laplacian(image: &BgrImage, kernel_size: u32) -> GrayImage {
    let gray = rescale::to_f32(&grayscale::bgr_to_gray(image));
    let size = kernel::normalize_odd(kernel_size);

    let smooth = kernel::deriv_kernel(0, size);
    let second = kernel::deriv_kernel(2, size);
    let dxx = separable_filter(&gray, &second, &smooth);
    let dyy = separable_filter(&gray, &smooth, &second);

    let response = GrayImageF32::from_fn(gray.width(), gray.height(), |x, y| {
        image::Luma([dxx.get_pixel(x, y).0[0] + dyy.get_pixel(x, y).0[0]])
    });
    rescale::abs_saturate(&response)
}
