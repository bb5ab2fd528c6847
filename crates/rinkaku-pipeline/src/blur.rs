//! Gaussian pre-blur with caller-controlled kernel size and sigma.
//!
//! The Canny filter smooths its input before gradient computation to
//! suppress spurious edges. Kernel size and sigma are independent user
//! parameters here, so the taps are built explicitly (see
//! [`crate::kernel::gaussian_kernel`]) and applied with `imageproc`'s
//! separable filter rather than the sigma-only
//! [`imageproc::filter::gaussian_blur_f32`].

use image::GrayImage;

use crate::kernel;

/// Apply a separable Gaussian blur with the given kernel size and sigma.
///
/// The kernel size is normalized to odd before use and both axes share
/// the same sigma. A kernel size of 1 is a single-tap kernel and
/// returns the image unchanged. Non-positive sigma values are derived
/// from the kernel size (see [`kernel::gaussian_kernel`]).
#[must_use = "returns the blurred image"]
pub fn gaussian_blur(image: &GrayImage, kernel_size: u32, sigma: f32) -> GrayImage {
    let taps = kernel::gaussian_kernel(kernel_size, sigma);
    if taps.len() == 1 {
        return image.clone();
    }

    imageproc::filter::separable_filter_equal(image, &taps)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 10x10 image with a sharp black-to-white boundary at x=5.
    fn sharp_edge_image() -> GrayImage {
        GrayImage::from_fn(10, 10, |x, _y| {
            if x < 5 { image::Luma([0]) } else { image::Luma([255]) }
        })
    }

    #[test]
    fn kernel_size_one_returns_identical_image() {
        let img = sharp_edge_image();
        assert_eq!(gaussian_blur(&img, 1, 2.0), img);
    }

    #[test]
    fn output_dimensions_preserved() {
        let blurred = gaussian_blur(&GrayImage::new(17, 31), 5, 1.4);
        assert_eq!(blurred.width(), 17);
        assert_eq!(blurred.height(), 31);
    }

    #[test]
    fn blur_smooths_sharp_edge() {
        let blurred = gaussian_blur(&sharp_edge_image(), 5, 2.0);

        // At the boundary the blurred image should have intermediate
        // values rather than a sharp 0-to-255 jump.
        let left_of_edge = blurred.get_pixel(4, 5).0[0];
        let right_of_edge = blurred.get_pixel(5, 5).0[0];
        assert!(
            left_of_edge > 0,
            "expected blur to raise left-of-edge above 0, got {left_of_edge}",
        );
        assert!(
            right_of_edge < 255,
            "expected blur to lower right-of-edge below 255, got {right_of_edge}",
        );
    }

    #[test]
    fn uniform_image_unchanged_by_blur() {
        let img = GrayImage::from_fn(10, 10, |_, _| image::Luma([128]));
        let blurred = gaussian_blur(&img, 5, 1.4);
        for pixel in blurred.pixels() {
            let diff = i16::from(pixel.0[0]) - 128;
            assert!(
                diff.abs() <= 1,
                "expected uniform image to stay near 128 after blur, got {}",
                pixel.0[0],
            );
        }
    }

    #[test]
    fn even_kernel_size_is_normalized_before_use() {
        let img = sharp_edge_image();
        assert_eq!(gaussian_blur(&img, 4, 1.0), gaussian_blur(&img, 5, 1.0));
    }

    #[test]
    fn zero_sigma_derives_from_kernel_size() {
        // sigma <= 0 still blurs: the bell width comes from the kernel size.
        let img = sharp_edge_image();
        let blurred = gaussian_blur(&img, 5, 0.0);
        assert_ne!(blurred, img, "expected derived-sigma blur to change the image");
    }
}
