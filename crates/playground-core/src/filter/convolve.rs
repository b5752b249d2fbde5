//! Fixed-kernel convolution for the blur and sharpen filters.
//!
//! Both kernels are the classic built-in ones found in common imaging
//! libraries:
//!
//! ```text
//! Blur (5x5, /16)        Sharpen (3x3, /16)
//! 1 1 1 1 1              -2 -2 -2
//! 1 0 0 0 1              -2 32 -2
//! 1 0 0 0 1              -2 -2 -2
//! 1 0 0 0 1
//! 1 1 1 1 1
//! ```
//!
//! Pixels closer to the border than the kernel radius have no full
//! neighbourhood and are copied through unchanged. Sums are divided by the
//! divisor, rounded half up and clamped to 0..=255.

use crate::decode::DecodedImage;

/// A square integer kernel with a divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    /// Side length (odd).
    pub size: usize,
    /// Row-major weights, `size * size` entries.
    pub weights: &'static [i32],
    /// Sum divisor.
    pub divisor: i32,
}

/// Low-pass ring kernel: averages the 16 pixels two steps away.
#[rustfmt::skip]
pub const BLUR_KERNEL: Kernel = Kernel {
    size: 5,
    weights: &[
        1, 1, 1, 1, 1,
        1, 0, 0, 0, 1,
        1, 0, 0, 0, 1,
        1, 0, 0, 0, 1,
        1, 1, 1, 1, 1,
    ],
    divisor: 16,
};

/// Local-contrast kernel: weights sum to the divisor, so flat areas are unchanged.
#[rustfmt::skip]
pub const SHARPEN_KERNEL: Kernel = Kernel {
    size: 3,
    weights: &[
        -2, -2, -2,
        -2, 32, -2,
        -2, -2, -2,
    ],
    divisor: 16,
};

impl Kernel {
    /// Distance from the centre to the kernel edge.
    #[inline]
    pub fn radius(&self) -> usize {
        self.size / 2
    }
}

/// Apply a kernel to every channel of an image, returning a new image.
///
/// Images smaller than the kernel in either dimension are returned as an
/// unchanged copy.
pub fn convolve(image: &DecodedImage, kernel: &Kernel) -> DecodedImage {
    debug_assert_eq!(kernel.weights.len(), kernel.size * kernel.size);

    let (w, h) = (image.width as usize, image.height as usize);
    if w < kernel.size || h < kernel.size {
        return image.clone();
    }

    let r = kernel.radius();
    let src = &image.pixels;
    // Border pixels keep their source values
    let mut output = src.clone();

    for y in r..h - r {
        for x in r..w - r {
            let mut sums = [0i32; 3];

            for ky in 0..kernel.size {
                let row = (y + ky - r) * w;
                for kx in 0..kernel.size {
                    let weight = kernel.weights[ky * kernel.size + kx];
                    if weight == 0 {
                        continue;
                    }
                    let idx = (row + x + kx - r) * 3;
                    sums[0] += weight * src[idx] as i32;
                    sums[1] += weight * src[idx + 1] as i32;
                    sums[2] += weight * src[idx + 2] as i32;
                }
            }

            let dst_idx = (y * w + x) * 3;
            for (c, sum) in sums.iter().enumerate() {
                output[dst_idx + c] = round_div_clamp(*sum, kernel.divisor);
            }
        }
    }

    DecodedImage {
        width: image.width,
        height: image.height,
        pixels: output,
    }
}

/// Divide, rounding half up, and clamp into a channel value.
#[inline]
fn round_div_clamp(sum: i32, divisor: i32) -> u8 {
    (sum + divisor / 2).div_euclid(divisor).clamp(0, 255) as u8
}
