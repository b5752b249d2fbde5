//! PNG encoding for the processed-image download.

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use thiserror::Error;

use crate::decode::DecodedImage;

/// Filename offered for the processed-image download.
pub const PROCESSED_FILENAME: &str = "processed.png";

/// MIME type of the processed-image download.
pub const PNG_MIME_TYPE: &str = "image/png";

/// PNG file signature.
#[cfg(test)]
const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 3), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode RGB pixel data to PNG bytes.
///
/// # Arguments
///
/// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Returns
///
/// PNG-encoded bytes. The encoding is lossless: decoding the result yields
/// exactly `pixels` with the same dimensions and channel count.
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    let expected_len = (width as usize) * (height as usize) * 3;
    if pixels.len() != expected_len {
        return Err(EncodeError::InvalidPixelData {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    let mut buffer = Vec::new();
    PngEncoder::new(&mut buffer)
        .write_image(pixels, width, height, ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer)
}

/// Encode a decoded image to PNG bytes.
pub fn encode_png_image(image: &DecodedImage) -> Result<Vec<u8>, EncodeError> {
    encode_png(&image.pixels, image.width, image.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_image;

    #[test]
    fn test_encode_png_signature() {
        let pixels = vec![128u8; 10 * 10 * 3];
        let png = encode_png(&pixels, 10, 10).unwrap();
        assert_eq!(&png[0..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_png_is_lossless() {
        let mut pixels = Vec::with_capacity(7 * 5 * 3);
        for y in 0..5u32 {
            for x in 0..7u32 {
                pixels.push((x * 30) as u8);
                pixels.push((y * 50) as u8);
                pixels.push(((x + y) * 17) as u8);
            }
        }

        let png = encode_png(&pixels, 7, 5).unwrap();
        let decoded = decode_image(&png).unwrap();

        assert_eq!(decoded.width, 7);
        assert_eq!(decoded.height, 5);
        assert_eq!(decoded.pixels, pixels);
    }

    #[test]
    fn test_encode_png_image() {
        let img = DecodedImage::new(3, 2, vec![9u8; 3 * 2 * 3]);
        let png = encode_png_image(&img).unwrap();
        assert_eq!(&png[0..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_png_invalid_pixel_data() {
        let pixels = vec![128u8; 99 * 100 * 3];
        let result = encode_png(&pixels, 100, 100);
        assert!(matches!(
            result,
            Err(EncodeError::InvalidPixelData {
                expected: 30000,
                actual: 29700
            })
        ));
    }

    #[test]
    fn test_encode_png_zero_dimensions() {
        assert!(matches!(
            encode_png(&[], 0, 10),
            Err(EncodeError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            encode_png(&[], 10, 0),
            Err(EncodeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_download_metadata() {
        assert_eq!(PROCESSED_FILENAME, "processed.png");
        assert_eq!(PNG_MIME_TYPE, "image/png");
    }
}
