//! Threshold whiteout, the "simple background removal" button.
//!
//! This is not segmentation. Any pixel brighter than a fixed luminance is
//! painted pure white, which only works on photos shot against an
//! already-bright backdrop.

use crate::decode::DecodedImage;
use crate::luminance::pixel_luminance;

/// Pixels whose mean channel value is strictly above this become white.
pub const WHITEOUT_THRESHOLD: f32 = 240.0;

const WHITE: [u8; 3] = [255, 255, 255];

/// Replace every pixel with mean luminance above [`WHITEOUT_THRESHOLD`] by white.
///
/// Each output pixel depends only on the matching input pixel.
pub fn threshold_whiteout(image: &DecodedImage) -> DecodedImage {
    let mut pixels = image.pixels.clone();
    let mut whitened = 0usize;

    for chunk in pixels.chunks_exact_mut(3) {
        if pixel_luminance(chunk) > WHITEOUT_THRESHOLD {
            chunk.copy_from_slice(&WHITE);
            whitened += 1;
        }
    }

    log::debug!(
        "threshold whiteout: {} of {} pixels set to white",
        whitened,
        image.pixel_count()
    );

    DecodedImage {
        width: image.width,
        height: image.height,
        pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bright_pixel_becomes_white() {
        let img = DecodedImage::new(1, 1, vec![250, 245, 241]);
        assert_eq!(threshold_whiteout(&img).pixels, vec![255, 255, 255]);
    }

    #[test]
    fn test_exact_threshold_unchanged() {
        // Mean is exactly 240, which is not strictly above
        let img = DecodedImage::new(1, 1, vec![240, 240, 240]);
        assert_eq!(threshold_whiteout(&img).pixels, vec![240, 240, 240]);
    }

    #[test]
    fn test_just_above_threshold() {
        // (240 + 240 + 241) / 3 = 240.33
        let img = DecodedImage::new(1, 1, vec![240, 240, 241]);
        assert_eq!(threshold_whiteout(&img).pixels, vec![255, 255, 255]);
    }

    #[test]
    fn test_uses_unweighted_mean() {
        // One saturated channel does not lift a dark pixel above the threshold
        let img = DecodedImage::new(1, 1, vec![255, 255, 200]);
        // mean = 236.67
        assert_eq!(threshold_whiteout(&img).pixels, vec![255, 255, 200]);
    }

    #[test]
    fn test_mixed_image() {
        let img = DecodedImage::new(3, 1, vec![0, 0, 0, 250, 250, 250, 128, 200, 240]);
        let out = threshold_whiteout(&img);
        assert_eq!(out.pixels, vec![0, 0, 0, 255, 255, 255, 128, 200, 240]);
        assert_eq!(out.width, 3);
        assert_eq!(out.height, 1);
    }

    #[test]
    fn test_input_not_mutated() {
        let img = DecodedImage::new(1, 1, vec![250, 250, 250]);
        let _ = threshold_whiteout(&img);
        assert_eq!(img.pixels, vec![250, 250, 250]);
    }
}
