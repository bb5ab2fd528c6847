//! Shared types for the rinkaku filter pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Re-export `GrayImage` so downstream crates can reference filter
/// output rasters without depending on `image` directly.
pub use image::GrayImage;

/// Re-export `RgbImage` so downstream crates can reference decoded
/// input rasters without depending on `image` directly.
pub use image::RgbImage;

/// A 3-channel 8-bit raster whose channels are stored in B,G,R order.
///
/// The pixel container is identical to [`RgbImage`]; only the channel
/// ordering convention differs. Filters take BGR input, matching the
/// convention of the image-processing libraries this pipeline mirrors.
/// Use [`crate::color`] to move between the two conventions.
pub type BgrImage = image::RgbImage;

/// A single-channel floating-point raster holding filter intermediates
/// (directional gradients, Laplacian response) before conversion back
/// to displayable 8-bit output. See [`crate::rescale`].
pub type GrayImageF32 = image::ImageBuffer<image::Luma<f32>, Vec<f32>>;

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Axis selection for the Sobel filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SobelDirection {
    /// Horizontal gradient only.
    X,
    /// Vertical gradient only.
    Y,
    /// Euclidean magnitude of both gradients.
    #[default]
    Both,
}

impl SobelDirection {
    /// Parse a direction name, matching case-insensitively.
    ///
    /// Unrecognized or empty names fall back to [`Both`](Self::Both).
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "x" => Self::X,
            "y" => Self::Y,
            _ => Self::Both,
        }
    }
}

impl fmt::Display for SobelDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("X"),
            Self::Y => f.write_str("Y"),
            Self::Both => f.write_str("Both"),
        }
    }
}

/// Parameters for the Canny filter.
///
/// `kernel_size` and `sigma` control the Gaussian pre-blur; the blur is
/// skipped entirely when `kernel_size <= 1` and `sigma <= 0`. The
/// thresholds drive hysteresis edge classification: gradient magnitudes
/// above `high_threshold` are definite edges, those between the two
/// thresholds are edges only when connected to a definite edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CannyParams {
    /// Gaussian pre-blur kernel size. Normalized to odd before use.
    pub kernel_size: u32,
    /// Gaussian pre-blur sigma, shared by both axes.
    pub sigma: f32,
    /// Hysteresis low threshold.
    pub low_threshold: u8,
    /// Hysteresis high threshold.
    pub high_threshold: u8,
}

impl CannyParams {
    /// Default pre-blur kernel size.
    pub const DEFAULT_KERNEL_SIZE: u32 = 5;
    /// Default pre-blur sigma.
    pub const DEFAULT_SIGMA: f32 = 1.0;
    /// Default hysteresis low threshold.
    pub const DEFAULT_LOW_THRESHOLD: u8 = 100;
    /// Default hysteresis high threshold.
    pub const DEFAULT_HIGH_THRESHOLD: u8 = 200;
}

impl Default for CannyParams {
    fn default() -> Self {
        Self {
            kernel_size: Self::DEFAULT_KERNEL_SIZE,
            sigma: Self::DEFAULT_SIGMA,
            low_threshold: Self::DEFAULT_LOW_THRESHOLD,
            high_threshold: Self::DEFAULT_HIGH_THRESHOLD,
        }
    }
}

/// Parameters for the Sobel filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SobelParams {
    /// Gradient window size. Normalized to odd before use.
    pub kernel_size: u32,
    /// Which gradient axis (or both) to compute.
    pub direction: SobelDirection,
}

impl SobelParams {
    /// Default gradient window size.
    pub const DEFAULT_KERNEL_SIZE: u32 = 3;
}

impl Default for SobelParams {
    fn default() -> Self {
        Self {
            kernel_size: Self::DEFAULT_KERNEL_SIZE,
            direction: SobelDirection::default(),
        }
    }
}

/// Parameters for the Laplacian filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaplacianParams {
    /// Aperture size. Normalized to odd before use.
    pub kernel_size: u32,
}

impl LaplacianParams {
    /// Default aperture size.
    pub const DEFAULT_KERNEL_SIZE: u32 = 3;
}

impl Default for LaplacianParams {
    fn default() -> Self {
        Self {
            kernel_size: Self::DEFAULT_KERNEL_SIZE,
        }
    }
}

/// A single edge-detection request: which filter to run and the
/// parameters it understands.
///
/// The tagged variants give each filter a closed parameter record, so a
/// request can never smuggle a foreign parameter into a filter. Values
/// are otherwise unconstrained here; slider ranges are the caller's
/// concern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FilterRequest {
    /// Two-threshold hysteresis edge detection with optional pre-blur.
    Canny(CannyParams),
    /// First-order directional gradients.
    Sobel(SobelParams),
    /// Second-order derivative response.
    Laplacian(LaplacianParams),
}

impl Default for FilterRequest {
    fn default() -> Self {
        Self::Canny(CannyParams::default())
    }
}

/// Result of running a filter over encoded image bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessResult {
    /// The single-channel 8-bit edge map.
    pub edges: GrayImage,

    /// Dimensions of the source image in pixels.
    ///
    /// Display and export consumers use this to set coordinate spaces
    /// without re-measuring the raster.
    pub dimensions: Dimensions,
}

/// Errors that can occur at the pipeline's decode boundary.
///
/// The filter functions themselves are pure and infallible; only the
/// byte-level entry point can fail.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to decode the input image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,
}
