//! Elementary image filters: blur, sharpen and threshold whiteout.
//!
//! Every filter takes a [`DecodedImage`] by reference and returns a new one
//! with the same dimensions and channel count. The input is never mutated.
//!
//! # Examples
//!
//! ```ignore
//! use playground_core::decode::decode_image;
//! use playground_core::encode::encode_png_image;
//! use playground_core::filter::{apply_filter, FilterKind};
//!
//! let image = decode_image(&bytes)?;
//! let blurred = apply_filter(&image, FilterKind::Blur);
//! let png = encode_png_image(&blurred)?;
//! ```

mod convolve;
mod threshold;

pub use convolve::{convolve, Kernel, BLUR_KERNEL, SHARPEN_KERNEL};
pub use threshold::{threshold_whiteout, WHITEOUT_THRESHOLD};

use serde::{Deserialize, Serialize};

use crate::decode::DecodedImage;

/// The filter selected by one of the three image buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterKind {
    /// 5x5 ring low-pass filter.
    Blur,
    /// 3x3 local-contrast filter.
    Sharpen,
    /// Naive background removal: bright pixels become white.
    ThresholdWhiteout,
}

impl FilterKind {
    /// All filters, in button order.
    pub const ALL: [FilterKind; 3] = [
        FilterKind::Blur,
        FilterKind::Sharpen,
        FilterKind::ThresholdWhiteout,
    ];

    /// Convert a u8 button index to a filter.
    ///
    /// Values:
    /// - 0 = Blur
    /// - 1 = Sharpen
    /// - 2 = ThresholdWhiteout
    pub fn from_u8(value: u8) -> Option<Self> {
        Self::ALL.get(value as usize).copied()
    }
}

/// Apply one filter to an image.
pub fn apply_filter(image: &DecodedImage, kind: FilterKind) -> DecodedImage {
    log::debug!(
        "applying {:?} to {}x{} image",
        kind,
        image.width,
        image.height
    );

    match kind {
        FilterKind::Blur => convolve(image, &BLUR_KERNEL),
        FilterKind::Sharpen => convolve(image, &SHARPEN_KERNEL),
        FilterKind::ThresholdWhiteout => threshold_whiteout(image),
    }
}

/// Apply a filter if one was selected, otherwise pass the image through.
///
/// Before any button is pressed the result shown and offered for download
/// is the original image.
pub fn apply_optional_filter(image: &DecodedImage, kind: Option<FilterKind>) -> DecodedImage {
    match kind {
        Some(kind) => apply_filter(image, kind),
        None => image.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a simple test image with a gradient pattern.
    fn test_image(width: u32, height: u32) -> DecodedImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 16) % 256) as u8);
                pixels.push(((y * 16) % 256) as u8);
                pixels.push(((x + y) * 8 % 256) as u8);
            }
        }
        DecodedImage::new(width, height, pixels)
    }

    #[test]
    fn test_from_u8() {
        assert_eq!(FilterKind::from_u8(0), Some(FilterKind::Blur));
        assert_eq!(FilterKind::from_u8(1), Some(FilterKind::Sharpen));
        assert_eq!(FilterKind::from_u8(2), Some(FilterKind::ThresholdWhiteout));
        assert_eq!(FilterKind::from_u8(3), None);
    }

    #[test]
    fn test_blur_changes_gradient_interior() {
        let mut img = test_image(12, 12);
        // A linear gradient is a fixed point of the symmetric ring kernel
        let idx = (6 * 12 + 6) * 3;
        img.pixels[idx] = 255;
        let out = apply_filter(&img, FilterKind::Blur);
        assert_ne!(out.pixels, img.pixels);
    }

    #[test]
    fn test_sharpen_changes_gradient_interior() {
        let mut img = test_image(12, 12);
        // Add an edge so sharpening has local contrast to amplify
        let idx = (6 * 12 + 6) * 3;
        img.pixels[idx] = 255;
        let out = apply_filter(&img, FilterKind::Sharpen);
        assert_ne!(out.pixels, img.pixels);
    }

    #[test]
    fn test_optional_filter_none_is_passthrough() {
        let img = test_image(8, 8);
        assert_eq!(apply_optional_filter(&img, None), img);
    }

    #[test]
    fn test_optional_filter_some_matches_apply() {
        let img = test_image(8, 8);
        assert_eq!(
            apply_optional_filter(&img, Some(FilterKind::Sharpen)),
            apply_filter(&img, FilterKind::Sharpen)
        );
    }

    #[test]
    fn test_one_pixel_image() {
        let img = DecodedImage::new(1, 1, vec![250, 250, 250]);
        for kind in FilterKind::ALL {
            let out = apply_filter(&img, kind);
            assert_eq!((out.width, out.height), (1, 1));
        }
    }
}
