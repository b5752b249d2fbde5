//! Image processing WASM bindings: decode, filter, PNG download.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, apply_filter, encode_png_from_image, download_filename,
//!          download_mime_type } from '@playground/wasm';
//!
//! const image = decode_image(new Uint8Array(await file.arrayBuffer()));
//! const blurred = apply_filter(image, 0); // 0 = blur, 1 = sharpen, 2 = background removal
//! const original = apply_filter(image, undefined); // no filter selected yet
//! const png = encode_png_from_image(blurred);
//! const blob = new Blob([png], { type: download_mime_type() });
//! ```

use crate::types::JsDecodedImage;
use playground_core::{decode, encode, filter};
use wasm_bindgen::prelude::*;

/// Decode an uploaded JPEG or PNG file to RGB.
///
/// # Errors
///
/// Returns an error for other formats and for corrupted files.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsDecodedImage, JsValue> {
    decode::decode_image(bytes)
        .map(JsDecodedImage::from_decoded)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// MIME type of an upload ("image/jpeg" or "image/png"), or `undefined`
/// for anything the uploader should reject before decoding.
#[wasm_bindgen]
pub fn detect_image_format(bytes: &[u8]) -> Option<String> {
    decode::detect_format(bytes).map(|f| f.mime_type().to_string())
}

/// Apply one filter, returning a new image.
///
/// Values:
/// - 0 = Blur
/// - 1 = Sharpen
/// - 2 = Background removal (threshold whiteout)
/// - `undefined` = no filter; the result is an unchanged copy
#[wasm_bindgen]
pub fn apply_filter(image: &JsDecodedImage, kind: Option<u8>) -> Result<JsDecodedImage, JsValue> {
    let kind = optional_filter_kind(kind).map_err(|e| JsValue::from_str(&e))?;
    Ok(JsDecodedImage::from_decoded(filter::apply_optional_filter(
        image.as_decoded(),
        kind,
    )))
}

/// Encode RGB pixel data to PNG bytes.
#[wasm_bindgen]
pub fn encode_png(pixels: &[u8], width: u32, height: u32) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(pixels, width, height).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a JsDecodedImage to PNG bytes for the download button.
#[wasm_bindgen]
pub fn encode_png_from_image(image: &JsDecodedImage) -> Result<Vec<u8>, JsValue> {
    encode::encode_png_image(image.as_decoded()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Filename for the processed-image download.
#[wasm_bindgen]
pub fn download_filename() -> String {
    encode::PROCESSED_FILENAME.to_string()
}

/// MIME type for the processed-image download.
#[wasm_bindgen]
pub fn download_mime_type() -> String {
    encode::PNG_MIME_TYPE.to_string()
}

fn filter_kind(value: u8) -> Result<filter::FilterKind, String> {
    filter::FilterKind::from_u8(value).ok_or_else(|| format!("Unknown filter: {}", value))
}

fn optional_filter_kind(value: Option<u8>) -> Result<Option<filter::FilterKind>, String> {
    value.map(filter_kind).transpose()
}
