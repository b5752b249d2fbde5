//! WASM-compatible wrapper types for image data.

use playground_core::decode::DecodedImage;
use wasm_bindgen::prelude::*;

/// A decoded image wrapper for JavaScript.
///
/// The pixel data stays in WASM memory. `pixels()` copies it out as a
/// `Uint8Array`, which is what the canvas preview needs.
#[wasm_bindgen]
pub struct JsDecodedImage {
    inner: DecodedImage,
}

#[wasm_bindgen]
impl JsDecodedImage {
    /// Create a new JsDecodedImage from dimensions and RGB pixel data.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsDecodedImage, JsValue> {
        let expected = width as usize * height as usize * DecodedImage::CHANNELS;
        if pixels.len() != expected {
            return Err(JsValue::from_str(&format!(
                "Invalid pixel data: expected {} bytes, got {}",
                expected,
                pixels.len()
            )));
        }
        Ok(Self::from_decoded(DecodedImage::new(width, height, pixels)))
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3 for RGB)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixels.len()
    }

    /// Returns RGB pixel data as Uint8Array.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels.clone()
    }

    /// Returns RGBA pixel data (alpha 255), ready for `ImageData`.
    pub fn rgba_pixels(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.inner.pixel_count() * 4);
        for chunk in self.inner.pixels.chunks_exact(3) {
            out.extend_from_slice(chunk);
            out.push(255);
        }
        out
    }
}

impl JsDecodedImage {
    pub(crate) fn from_decoded(img: DecodedImage) -> Self {
        Self { inner: img }
    }

    pub(crate) fn as_decoded(&self) -> &DecodedImage {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_decoded_image_accessors() {
        let img = JsDecodedImage::from_decoded(DecodedImage::new(100, 50, vec![0u8; 100 * 50 * 3]));
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.byte_length(), 15000);
    }

    #[test]
    fn test_js_decoded_image_pixels() {
        let pixels = vec![255u8, 128, 64, 32, 16, 8];
        let img = JsDecodedImage::from_decoded(DecodedImage::new(2, 1, pixels.clone()));
        assert_eq!(img.pixels(), pixels);
    }

    #[test]
    fn test_rgba_pixels() {
        let img = JsDecodedImage::from_decoded(DecodedImage::new(2, 1, vec![1, 2, 3, 4, 5, 6]));
        assert_eq!(img.rgba_pixels(), vec![1, 2, 3, 255, 4, 5, 6, 255]);
    }

    #[test]
    fn test_as_decoded() {
        let img = JsDecodedImage::from_decoded(DecodedImage::new(1, 1, vec![9, 9, 9]));
        assert_eq!(img.as_decoded().pixels, vec![9, 9, 9]);
    }
}
