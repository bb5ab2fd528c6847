//! Sobel directional gradient filter.
//!
//! Computes first-order intensity gradients at floating-point precision
//! using separable derivative/smoothing kernel pairs (see
//! [`crate::kernel::deriv_kernel`]), then collapses the result to a
//! displayable 8-bit raster: saturated absolute values for a single
//! axis, min-max rescaled Euclidean magnitude for both.

use image::GrayImage;
use imageproc::filter::separable_filter;

use crate::types::{BgrImage, GrayImageF32, SobelDirection};
use crate::{grayscale, kernel, rescale};

/// Apply the Sobel operator along the requested direction.
///
/// The kernel size is normalized to odd before use.
///
/// With [`SobelDirection::Both`], the horizontal and vertical gradients
/// are combined as a per-pixel Euclidean magnitude and the full range
/// present in the image is linearly rescaled to [0,255]; a flat input
/// (no gradient anywhere) yields an all-zero output. With a single
/// axis, the absolute gradient is clamped to [0,255] without rescaling,
/// so strong gradients saturate at 255.
#[must_use = "returns the gradient image"]
pub fn sobel(image: &BgrImage, kernel_size: u32, direction: SobelDirection) -> GrayImage {
    let gray = rescale::to_f32(&grayscale::bgr_to_gray(image));
    let size = kernel::normalize_odd(kernel_size);

    match direction {
        SobelDirection::X => rescale::abs_saturate(&horizontal_gradient(&gray, size)),
        SobelDirection::Y => rescale::abs_saturate(&vertical_gradient(&gray, size)),
        SobelDirection::Both => {
            let gx = horizontal_gradient(&gray, size);
            let gy = vertical_gradient(&gray, size);
            rescale::min_max_normalize(&magnitude(&gx, &gy))
        }
    }
}

/// First derivative along x, binomial smoothing along y.
///
/// Also used by the Canny operator at the fixed 3x3 size.
pub(crate) fn horizontal_gradient(image: &GrayImageF32, size: u32) -> GrayImageF32 {
    separable_filter(
        image,
        &kernel::deriv_kernel(1, size),
        &kernel::deriv_kernel(0, size),
    )
}

/// First derivative along y, binomial smoothing along x.
pub(crate) fn vertical_gradient(image: &GrayImageF32, size: u32) -> GrayImageF32 {
    separable_filter(
        image,
        &kernel::deriv_kernel(0, size),
        &kernel::deriv_kernel(1, size),
    )
}

/// Per-pixel Euclidean magnitude of two gradient rasters.
pub(crate) fn magnitude(gx: &GrayImageF32, gy: &GrayImageF32) -> GrayImageF32 {
    GrayImageF32::from_fn(gx.width(), gx.height(), |x, y| {
        image::Luma([gx.get_pixel(x, y).0[0].hypot(gy.get_pixel(x, y).0[0])])
    })
}
