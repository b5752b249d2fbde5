//! Image encoding for the processed-image download.
//!
//! The result of a filter is offered as a lossless PNG. Use
//! [`PROCESSED_FILENAME`] and [`PNG_MIME_TYPE`] for the download.
//!
//! # Examples
//!
//! ```ignore
//! use playground_core::encode::encode_png;
//!
//! let pixels = vec![128u8; 100 * 100 * 3]; // Gray image
//! let png_bytes = encode_png(&pixels, 100, 100).unwrap();
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod png;

pub use png::{encode_png, encode_png_image, EncodeError, PNG_MIME_TYPE, PROCESSED_FILENAME};
