//! Grayscale conversion for B,G,R-ordered rasters.
//!
//! Every filter starts by collapsing its color input to a single luma
//! channel with the standard weighting `0.299*R + 0.587*G + 0.114*B`.

use image::GrayImage;

use crate::rescale;
use crate::types::BgrImage;

/// Collapse a B,G,R raster to single-channel luma.
///
/// Deterministic and infallible: the weighting is fixed and the result
/// cannot leave the 8-bit range (the weights sum to 1).
#[must_use = "returns the grayscale image"]
pub fn bgr_to_gray(image: &BgrImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let [b, g, r] = image.get_pixel(x, y).0;
        let luma = 0.299 * f32::from(r) + 0.587 * f32::from(g) + 0.114 * f32::from(b);
        image::Luma([rescale::saturate_u8(luma)])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_bgr(b: u8, g: u8, r: u8) -> BgrImage {
        BgrImage::from_pixel(2, 2, image::Rgb([b, g, r]))
    }

    #[test]
    fn dimensions_preserved() {
        let gray = bgr_to_gray(&BgrImage::new(17, 31));
        assert_eq!(gray.width(), 17);
        assert_eq!(gray.height(), 31);
    }

    #[test]
    fn white_stays_white_and_black_stays_black() {
        assert_eq!(bgr_to_gray(&solid_bgr(255, 255, 255)).get_pixel(0, 0).0[0], 255);
        assert_eq!(bgr_to_gray(&solid_bgr(0, 0, 0)).get_pixel(0, 0).0[0], 0);
    }

    #[test]
    fn luma_weighting_orders_primaries() {
        // A weighted luminance conversion, not a simple average: green
        // contributes most, blue least.
        let g_val = bgr_to_gray(&solid_bgr(0, 255, 0)).get_pixel(0, 0).0[0];
        let r_val = bgr_to_gray(&solid_bgr(0, 0, 255)).get_pixel(0, 0).0[0];
        let b_val = bgr_to_gray(&solid_bgr(255, 0, 0)).get_pixel(0, 0).0[0];
        assert!(
            g_val > r_val && r_val > b_val,
            "expected green > red > blue luminance, got R={r_val} G={g_val} B={b_val}",
        );
    }

    #[test]
    fn channel_order_is_bgr_not_rgb() {
        // A pure-blue BGR pixel has its value in channel 0; reading the
        // raster as RGB would weight it as red instead.
        let blue = bgr_to_gray(&solid_bgr(255, 0, 0)).get_pixel(0, 0).0[0];
        assert_eq!(blue, 29, "0.114 * 255 rounds to 29");
    }
}
