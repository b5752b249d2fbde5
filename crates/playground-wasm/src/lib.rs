//! Playground WASM - WebAssembly bindings for the matrix playground
//!
//! This crate exposes the playground-core computations to the web UI.
//!
//! # Module Structure
//!
//! - `points` - 2D point parsing and rotation
//! - `image` - Image decoding, filters and PNG download
//! - `session` - CSV data explorer session and menu dispatch
//! - `locale` - English / Indonesian label tables
//! - `logger` - Browser console logging for `log`
//! - `types` - WASM-compatible wrapper types for image data
//!
//! # Usage
//!
//! ```typescript
//! import init, { labels, parse_and_rotate } from '@playground/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const t = labels('Indonesia');
//! const result = parse_and_rotate('0,0\n1,0\n1,1\n0,1', 45);
//! ```

use wasm_bindgen::prelude::*;

mod image;
mod locale;
mod logger;
mod points;
mod session;
mod types;

// Re-export public types
pub use image::{
    apply_filter, decode_image, detect_image_format, download_filename, download_mime_type,
    encode_png, encode_png_from_image,
};
pub use locale::{label, labels, locale_keys, notice_is_warning, notice_text};
pub use logger::set_log_level;
pub use points::{count_points, parse_and_rotate, rotation_matrix};
pub use session::JsSession;
pub use types::JsDecodedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    logger::install(logger::DEFAULT_LEVEL);
    log::info!("playground-wasm {} ready", version());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
