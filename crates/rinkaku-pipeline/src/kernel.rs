//! Convolution kernel construction and size normalization.
//!
//! Blur, gradient, and Laplacian windows have a hard odd-size
//! constraint; [`normalize_odd`] maps any requested size onto the
//! nearest valid one. The 1-D kernels themselves are built here:
//! Gaussian taps for the pre-blur, and binomial smoothing/differencing
//! kernels for the derivative operators so Sobel and Laplacian honor
//! arbitrary odd aperture sizes rather than a fixed 3x3 window.

/// Round a requested kernel size up to the nearest valid (odd) size.
///
/// Odd sizes pass through unchanged; even sizes are bumped by one.
/// Zero is even and therefore maps to 1 by the same rule.
#[must_use]
pub const fn normalize_odd(size: u32) -> u32 {
    if size % 2 == 1 { size } else { size + 1 }
}

/// Build a normalized 1-D Gaussian kernel.
///
/// The length is `size` normalized to odd. A non-positive `sigma` is
/// derived from the kernel size as `0.3 * ((size - 1) * 0.5 - 1) + 0.8`,
/// the convention of the reference filters this pipeline mirrors, so a
/// caller that only sets the size still gets a sensible bell curve.
/// The taps sum to 1.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn gaussian_kernel(size: u32, sigma: f32) -> Vec<f32> {
    let size = normalize_odd(size);
    let sigma = if sigma > 0.0 {
        sigma
    } else {
        0.3 * ((size - 1) as f32 * 0.5 - 1.0) + 0.8
    };

    let center = i64::from(size / 2);
    let denom = 2.0 * sigma * sigma;
    let mut kernel: Vec<f32> = (0..i64::from(size))
        .map(|i| {
            let d = (i - center) as f32;
            (-d * d / denom).exp()
        })
        .collect();

    let sum: f32 = kernel.iter().sum();
    for tap in &mut kernel {
        *tap /= sum;
    }
    kernel
}

/// Build the 1-D derivative kernel of the given `order` for a square
/// aperture of odd length `size`.
///
/// Order 0 is the binomial smoothing kernel, 1 the first derivative,
/// 2 the second. The taps come from the Pascal-triangle recurrence:
/// a binomial row of length `size - order` is grown first, then a
/// differencing pass is applied `order` times.
///
/// A `size` of 1 with a non-zero order selects a 3-tap derivative (the
/// paired smoothing kernel stays `[1]`, so no cross-axis smoothing is
/// applied).
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn deriv_kernel(order: u32, size: u32) -> Vec<f32> {
    debug_assert!(order <= 2, "derivative order above 2 is not used");
    debug_assert!(size % 2 == 1, "kernel size must be normalized to odd");

    let size = if size == 1 && order > 0 { 3 } else { size };
    let size = size as usize;
    let order = order as usize;

    let mut taps = vec![0.0f32; size + 1];
    taps[0] = 1.0;

    // Grow a binomial row of length size - order.
    for _ in 0..size - order - 1 {
        let mut carry = taps[0];
        for j in 1..=size {
            let next = taps[j] + taps[j - 1];
            taps[j - 1] = carry;
            carry = next;
        }
    }

    // Apply the differencing pass once per derivative order.
    for _ in 0..order {
        let mut carry = -taps[0];
        for j in 1..=size {
            let next = taps[j - 1] - taps[j];
            taps[j - 1] = carry;
            carry = next;
        }
    }

    taps.truncate(size);
    taps
}
