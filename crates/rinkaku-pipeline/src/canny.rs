//! Canny edge detection.
//!
//! The full operator lives here: 3x3 Sobel gradients, non-maximum
//! suppression along the gradient direction, and hysteresis
//! thresholding, run over the (optionally pre-blurred) grayscale input.
//! Returns a binary image where white pixels (255) are edges and black
//! pixels (0) are background.
//!
//! The hysteresis walk bounds-checks every neighbor before access, so
//! edge chains that reach the image border terminate cleanly instead of
//! wrapping coordinates (the upstream `imageproc 0.26` operator panics
//! there, see <https://github.com/image-rs/imageproc/issues/705>).

use image::GrayImage;

use crate::types::{BgrImage, GrayImageF32};
use crate::{blur, grayscale, rescale, sobel};

/// Detect edges with the Canny algorithm.
///
/// The input is collapsed to grayscale, pre-blurred when
/// `kernel_size > 1` or `sigma > 0`, then run through the two-threshold
/// operator: gradient computation, non-maximum suppression, and
/// hysteresis thresholding. Gradient magnitudes at or above
/// `high_threshold` are definite edges; those at or above
/// `low_threshold` become edges only when connected to a definite edge.
///
/// Output is binary: 255 for edge pixels, 0 for everything else, so no
/// further rescaling is needed.
///
/// Thresholds are not validated against each other. A low threshold
/// above the high threshold simply leaves no weak-edge band: the result
/// degenerates to the definite edges alone.
#[must_use = "returns the binary edge map"]
pub fn canny(
    image: &BgrImage,
    low_threshold: u8,
    high_threshold: u8,
    kernel_size: u32,
    sigma: f32,
) -> GrayImage {
    let gray = grayscale::bgr_to_gray(image);
    let gray = if kernel_size > 1 || sigma > 0.0 {
        blur::gaussian_blur(&gray, kernel_size, sigma)
    } else {
        gray
    };

    let lifted = rescale::to_f32(&gray);
    let gx = sobel::horizontal_gradient(&lifted, 3);
    let gy = sobel::vertical_gradient(&lifted, 3);
    let magnitude = sobel::magnitude(&gx, &gy);

    let thinned = non_maximum_suppression(&magnitude, &gx, &gy);
    hysteresis(
        &thinned,
        f32::from(low_threshold),
        f32::from(high_threshold),
    )
}

/// Suppress gradient magnitudes that are not a local maximum along
/// their own gradient direction, thinning ridges to single-pixel width.
///
/// The gradient angle is quantized to one of four sectors (0, 45, 90,
/// 135 degrees) and the pixel is compared against its two neighbors
/// across that sector. Border pixels stay zero.
fn non_maximum_suppression(
    magnitude: &GrayImageF32,
    gx: &GrayImageF32,
    gy: &GrayImageF32,
) -> GrayImageF32 {
    let mut out = GrayImageF32::new(magnitude.width(), magnitude.height());
    for y in 1..magnitude.height().saturating_sub(1) {
        for x in 1..magnitude.width().saturating_sub(1) {
            let x_gradient = gx.get_pixel(x, y).0[0];
            let y_gradient = gy.get_pixel(x, y).0[0];
            let mut angle = y_gradient.atan2(x_gradient).to_degrees();
            if angle < 0.0 {
                angle += 180.0;
            }

            let (first, second) = if (22.5..67.5).contains(&angle) {
                (
                    magnitude.get_pixel(x + 1, y + 1).0[0],
                    magnitude.get_pixel(x - 1, y - 1).0[0],
                )
            } else if (67.5..112.5).contains(&angle) {
                (
                    magnitude.get_pixel(x, y - 1).0[0],
                    magnitude.get_pixel(x, y + 1).0[0],
                )
            } else if (112.5..157.5).contains(&angle) {
                (
                    magnitude.get_pixel(x - 1, y + 1).0[0],
                    magnitude.get_pixel(x + 1, y - 1).0[0],
                )
            } else {
                (
                    magnitude.get_pixel(x - 1, y).0[0],
                    magnitude.get_pixel(x + 1, y).0[0],
                )
            };

            let m = magnitude.get_pixel(x, y).0[0];
            if m >= first && m >= second {
                out.put_pixel(x, y, image::Luma([m]));
            }
        }
    }
    out
}

/// Classify edges with two thresholds.
///
/// Every interior pixel at or above `high` seeds a depth-first walk
/// that marks connected neighbors at or above `low`. Neighbors are
/// bounds-checked before access, so chains reaching the border stop
/// there.
fn hysteresis(thinned: &GrayImageF32, low: f32, high: f32) -> GrayImage {
    let (width, height) = (thinned.width(), thinned.height());
    let mut out = GrayImage::new(width, height);
    let mut pending: Vec<(u32, u32)> = Vec::new();

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            if thinned.get_pixel(x, y).0[0] >= high && out.get_pixel(x, y).0[0] == 0 {
                out.put_pixel(x, y, image::Luma([255]));
                pending.push((x, y));

                // Follow weak neighbors until the chain dies out.
                while let Some((cx, cy)) = pending.pop() {
                    for (nx, ny) in neighbors(cx, cy) {
                        if nx >= width || ny >= height {
                            continue;
                        }
                        if thinned.get_pixel(nx, ny).0[0] >= low
                            && out.get_pixel(nx, ny).0[0] == 0
                        {
                            out.put_pixel(nx, ny, image::Luma([255]));
                            pending.push((nx, ny));
                        }
                    }
                }
            }
        }
    }
    out
}

/// The eight neighbor coordinates of `(x, y)`.
///
/// Coordinates at the low border wrap to `u32::MAX`; the caller's
/// bounds check rejects them.
const fn neighbors(x: u32, y: u32) -> [(u32, u32); 8] {
    [
        (x.wrapping_sub(1), y.wrapping_sub(1)),
        (x, y.wrapping_sub(1)),
        (x + 1, y.wrapping_sub(1)),
        (x.wrapping_sub(1), y),
        (x + 1, y),
        (x.wrapping_sub(1), y + 1),
        (x, y + 1),
        (x + 1, y + 1),
    ]
}
