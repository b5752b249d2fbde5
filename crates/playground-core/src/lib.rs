//! Playground Core - computation behind the matrix, image and data demos
//!
//! This crate provides the pure computations the playground UI calls into:
//! 2D point rotation, elementary image filters with PNG export, CSV table
//! summaries, and the bilingual label table.

pub mod decode;
pub mod encode;
pub mod filter;
pub mod locale;
pub mod luminance;
pub mod menu;
pub mod points;
pub mod session;
pub mod table;

pub use decode::{decode_image, DecodedImage};
pub use encode::{encode_png, encode_png_image};
pub use filter::{apply_filter, apply_optional_filter, FilterKind};
pub use locale::{Labels, Locale};
pub use menu::{dispatch, MenuAction, MenuOutcome};
pub use points::{parse_points, rotate_points, Point2D, RotationRequest, RotationResult};
pub use session::Session;
pub use table::{Table, TableError};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A user-visible message that replaces the content of a data page.
///
/// These are expected situations (no upload yet, nothing numeric to plot),
/// not failures. Localized text comes from [`Labels::notice`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Notice {
    /// A data action ran before any CSV was uploaded.
    #[error("No data loaded")]
    NoData,
    /// The selected data has no values to plot.
    #[error("Nothing to visualize")]
    NothingToVisualize,
    /// The requested column does not exist.
    #[error("Unknown column: {0}")]
    UnknownColumn(String),
    /// The requested column is not numeric.
    #[error("Column is not numeric: {0}")]
    NotNumeric(String),
}

impl Notice {
    /// Whether the UI should style this as a warning rather than as info.
    pub fn is_warning(&self) -> bool {
        matches!(self, Notice::NoData | Notice::UnknownColumn(_))
    }
}
