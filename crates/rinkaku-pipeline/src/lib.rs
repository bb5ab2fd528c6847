//! rinkaku-pipeline: Pure edge detection filter pipeline (sans-IO).
//!
//! Turns a decoded color raster and one [`FilterRequest`] into a
//! single-channel 8-bit edge map through:
//! color-space adaptation -> grayscale -> (optional pre-blur) ->
//! Canny / Sobel / Laplacian -> 8-bit rescaling.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! rasters (plus a byte-decode convenience entry) and returns raster
//! data. File handling, parameter widgets, and PNG encoding for
//! download live with the caller.
//!
//! Every filter call is pure and stateless: fresh inputs in, a freshly
//! allocated raster out, nothing retained between invocations. Malformed
//! rasters (zero dimensions) are a caller-side precondition violation;
//! the pipeline does not validate them.

pub mod blur;
pub mod canny;
pub mod color;
pub mod decode;
pub mod grayscale;
pub mod kernel;
pub mod laplacian;
pub mod rescale;
pub mod sobel;
pub mod types;

pub use types::{
    BgrImage, CannyParams, Dimensions, FilterRequest, GrayImage, GrayImageF32, LaplacianParams,
    PipelineError, ProcessResult, RgbImage, SobelDirection, SobelParams,
};

/// Run exactly one filter over a B,G,R raster.
///
/// Dispatches on the request variant, so a recompute invokes a single
/// filter with only the parameters that filter understands. Width and
/// height are preserved; the output is always single-channel 8-bit.
#[must_use = "returns the filtered image"]
pub fn apply(image: &BgrImage, request: &FilterRequest) -> GrayImage {
    match *request {
        FilterRequest::Canny(p) => canny::canny(
            image,
            p.low_threshold,
            p.high_threshold,
            p.kernel_size,
            p.sigma,
        ),
        FilterRequest::Sobel(p) => sobel::sobel(image, p.kernel_size, p.direction),
        FilterRequest::Laplacian(p) => laplacian::laplacian(image, p.kernel_size),
    }
}

/// Run one filter over raw encoded image bytes.
///
/// Decodes the bytes, adapts the raster into the pipeline's B,G,R
/// convention, and applies the requested filter. The source dimensions
/// are returned alongside the edge map for display/export consumers.
///
/// # Errors
///
/// Returns [`PipelineError::EmptyInput`] if `image_bytes` is empty.
/// Returns [`PipelineError::ImageDecode`] if the image format is
/// unrecognized.
pub fn process(
    image_bytes: &[u8],
    request: &FilterRequest,
) -> Result<ProcessResult, PipelineError> {
    let rgb = decode::decode_to_rgb(image_bytes)?;
    let dimensions = Dimensions {
        width: rgb.width(),
        height: rgb.height(),
    };

    let bgr = color::rgb_to_bgr(&rgb);
    let edges = apply(&bgr, request);
    Ok(ProcessResult { edges, dimensions })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Create a PNG with a sharp black/white boundary for testing.
    ///
    /// The left half is black, the right half is white, producing a
    /// strong vertical edge that every filter responds to.
    fn sharp_edge_png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, _y| {
            if x < width / 2 {
                image::Rgb([0, 0, 0])
            } else {
                image::Rgb([255, 255, 255])
            }
        });
        let mut buf = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut buf);
        image::ImageEncoder::write_image(
            encoder,
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgb8,
        )
        .unwrap();
        buf
    }

    #[test]
    fn process_empty_input() {
        let result = process(&[], &FilterRequest::default());
        assert!(matches!(result, Err(PipelineError::EmptyInput)));
    }

    #[test]
    fn process_corrupt_input() {
        let result = process(&[0xFF, 0x00], &FilterRequest::default());
        assert!(matches!(result, Err(PipelineError::ImageDecode(_))));
    }

    #[test]
    fn process_reports_source_dimensions() {
        let png = sharp_edge_png(40, 30);
        for request in [
            FilterRequest::Canny(CannyParams::default()),
            FilterRequest::Sobel(SobelParams::default()),
            FilterRequest::Laplacian(LaplacianParams::default()),
        ] {
            let result = process(&png, &request).unwrap();
            assert_eq!(
                result.dimensions,
                Dimensions {
                    width: 40,
                    height: 30
                },
            );
            assert_eq!(result.edges.width(), 40);
            assert_eq!(result.edges.height(), 30);
        }
    }

    #[test]
    fn flat_black_field_has_no_canny_edges() {
        // 4x4 all-black raster through Canny(low=100, high=200, k=5,
        // sigma=1.0): no gradients anywhere, so no edges.
        let black = BgrImage::new(4, 4);
        let request = FilterRequest::Canny(CannyParams {
            kernel_size: 5,
            sigma: 1.0,
            low_threshold: 100,
            high_threshold: 200,
        });
        let edges = apply(&black, &request);
        assert_eq!(edges.width(), 4);
        assert_eq!(edges.height(), 4);
        assert!(
            edges.pixels().all(|p| p.0[0] == 0),
            "expected no edges in a flat black field",
        );
    }

    #[test]
    fn canny_output_is_binary_for_any_threshold_pair() {
        let png = sharp_edge_png(24, 24);
        for (low, high) in [(0, 0), (100, 200), (200, 100), (255, 255)] {
            let request = FilterRequest::Canny(CannyParams {
                kernel_size: 5,
                sigma: 1.0,
                low_threshold: low,
                high_threshold: high,
            });
            let result = process(&png, &request).unwrap();
            assert!(
                result.edges.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255),
                "expected binary output for thresholds ({low}, {high})",
            );
        }
    }

    #[test]
    fn apply_dispatches_each_variant() {
        let png = sharp_edge_png(20, 20);
        let rgb = decode::decode_to_rgb(&png).unwrap();
        let bgr = color::rgb_to_bgr(&rgb);

        for request in [
            FilterRequest::Canny(CannyParams::default()),
            FilterRequest::Sobel(SobelParams::default()),
            FilterRequest::Laplacian(LaplacianParams::default()),
        ] {
            let out = apply(&bgr, &request);
            assert!(
                out.pixels().any(|p| p.0[0] > 0),
                "expected {request:?} to respond to a sharp boundary",
            );
        }
    }
}
