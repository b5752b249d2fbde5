//! Image decoding for uploaded files.
//!
//! The upload widget accepts JPEG and PNG only. Everything is converted to
//! an RGB8 [`DecodedImage`], the single structure the filters work on.
//!
//! # Examples
//!
//! ```ignore
//! use playground_core::decode::decode_image;
//!
//! let bytes = std::fs::read("photo.jpg").unwrap();
//! let image = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod reader;
mod types;

pub use reader::{decode_image, detect_format};
pub use types::{DecodeError, DecodedImage, SourceFormat};
