//! JPEG/PNG decoding into RGB buffers.

use std::io::Cursor;

use image::ImageReader;

use super::{DecodeError, DecodedImage, SourceFormat};

/// Decode an uploaded JPEG or PNG file into an RGB image.
///
/// Alpha channels and grayscale data are converted to RGB8, the same way
/// the upload widget hands every image to the filters.
///
/// # Errors
///
/// Returns `DecodeError::UnsupportedFormat` if the bytes are neither JPEG nor PNG.
/// Returns `DecodeError::CorruptedFile` if the file is truncated or malformed.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let format = reader
        .format()
        .and_then(SourceFormat::from_image_format)
        .ok_or(DecodeError::UnsupportedFormat)?;

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    log::debug!(
        "decoded {:?} image {}x{}",
        format,
        img.width(),
        img.height()
    );

    Ok(DecodedImage::from_rgb_image(img.into_rgb8()))
}

/// Guess the source format from the file signature without decoding.
pub fn detect_format(bytes: &[u8]) -> Option<SourceFormat> {
    image::guess_format(bytes)
        .ok()
        .and_then(SourceFormat::from_image_format)
}
