//! Luminance as used by the threshold whiteout.
//!
//! This is the unweighted mean of the three channels, not a perceptual
//! (BT.601/BT.709) luminance.

/// Calculate luminance from u8 RGB values (0 to 255).
///
/// # Returns
/// The arithmetic mean of the three channels (0.0 to 255.0)
#[inline]
pub fn mean_luminance(r: u8, g: u8, b: u8) -> f32 {
    (r as f32 + g as f32 + b as f32) / 3.0
}

/// Calculate luminance for one RGB chunk of a pixel buffer.
#[inline]
pub fn pixel_luminance(pixel: &[u8]) -> f32 {
    mean_luminance(pixel[0], pixel[1], pixel[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance_pure_white() {
        assert!((mean_luminance(255, 255, 255) - 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_luminance_pure_black() {
        assert!(mean_luminance(0, 0, 0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_luminance_is_unweighted() {
        // Every primary contributes a third, unlike BT.709
        let r = mean_luminance(255, 0, 0);
        let g = mean_luminance(0, 255, 0);
        let b = mean_luminance(0, 0, 255);
        assert!((r - 85.0).abs() < 1e-4);
        assert!((r - g).abs() < f32::EPSILON);
        assert!((g - b).abs() < f32::EPSILON);
    }

    #[test]
    fn test_luminance_gray_preserves_value() {
        for v in [0u8, 64, 128, 192, 255] {
            assert!((mean_luminance(v, v, v) - v as f32).abs() < 1e-4);
        }
    }

    #[test]
    fn test_pixel_luminance_matches() {
        let chunk = [240u8, 241, 242];
        assert!((pixel_luminance(&chunk) - 241.0).abs() < 1e-4);
    }
}
