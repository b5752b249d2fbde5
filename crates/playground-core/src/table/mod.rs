//! CSV tables backed by a polars [`DataFrame`], and their summaries.
//!
//! A [`Table`] is built once per upload and then only read. Every summary
//! (shape, dtypes, describe, histogram, missing counts) is a pure function of
//! the frame.
//!
//! ## Normalization
//!
//! After reading, each column is cleaned so the summaries agree with each
//! other:
//! 1. Float NaN cells become nulls (they count as missing).
//! 2. A column with rows but only nulls becomes `float64`.
//!
//! Header-only columns keep the reader's `object` type.

mod describe;
mod histogram;
mod load;

pub use describe::{ColumnSummary, Describe};
pub use histogram::{HistogramData, HistogramOptions, DEFAULT_HISTOGRAM_BINS};
pub use load::NULL_TOKENS;

use polars::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Notice;

/// Errors raised while loading a CSV file.
#[derive(Debug, Error)]
pub enum TableError {
    /// The file has no header row.
    #[error("CSV file is empty")]
    Empty,

    /// The CSV reader rejected the file (too many fields, bad encoding).
    #[error("Invalid CSV: {0}")]
    Read(#[from] PolarsError),
}

/// Inferred element type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dtype {
    #[serde(rename = "int64")]
    Int64,
    #[serde(rename = "float64")]
    Float64,
    #[serde(rename = "object")]
    Object,
}

impl Dtype {
    /// Collapse a polars type to the three labels the summary page shows.
    pub fn of(dtype: &DataType) -> Self {
        if dtype.is_integer() {
            Dtype::Int64
        } else if dtype.is_float() {
            Dtype::Float64
        } else {
            Dtype::Object
        }
    }

    /// Display label, in the usual dataframe spelling.
    pub fn label(self) -> &'static str {
        match self {
            Dtype::Int64 => "int64",
            Dtype::Float64 => "float64",
            Dtype::Object => "object",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Dtype::Int64 | Dtype::Float64)
    }
}

impl std::fmt::Display for Dtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A column name with its inferred type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDtype {
    pub column: String,
    pub dtype: Dtype,
}

/// Missing-value count for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingCount {
    pub column: String,
    pub missing: usize,
}

/// An uploaded table.
#[derive(Clone, Default)]
pub struct Table {
    df: DataFrame,
}

impl Table {
    /// Wrap a frame, turning NaN cells into nulls and typing all-null
    /// columns as `float64`.
    pub fn from_frame(df: DataFrame) -> Result<Self, TableError> {
        let columns = df
            .get_columns()
            .iter()
            .map(normalize_column)
            .collect::<PolarsResult<Vec<_>>>()?;
        Ok(Self {
            df: DataFrame::new(columns)?,
        })
    }

    /// Parse a CSV file with a header row.
    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Self, TableError> {
        load::read_csv(bytes)
    }

    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    /// `(row_count, column_count)`.
    pub fn shape(&self) -> (usize, usize) {
        self.df.shape()
    }

    /// Inferred type of every column, in column order.
    pub fn dtypes(&self) -> Vec<ColumnDtype> {
        self.df
            .get_columns()
            .iter()
            .map(|c| ColumnDtype {
                column: c.name().to_string(),
                dtype: Dtype::of(c.dtype()),
            })
            .collect()
    }

    /// Names of the columns offered in the histogram selector.
    pub fn numeric_columns(&self) -> Vec<&str> {
        self.df
            .get_columns()
            .iter()
            .filter(|c| Dtype::of(c.dtype()).is_numeric())
            .map(|c| c.name().as_str())
            .collect()
    }

    /// Descriptive statistics for the numeric columns.
    pub fn describe(&self) -> Describe {
        describe::describe(self)
    }

    /// Histogram of one numeric column.
    ///
    /// Returns a [`Notice`] rather than an error when there is nothing to plot.
    pub fn histogram(
        &self,
        column: &str,
        options: &HistogramOptions,
    ) -> Result<HistogramData, Notice> {
        let col = self
            .df
            .column(column)
            .map_err(|_| Notice::UnknownColumn(column.to_string()))?;
        let values = numeric_values(col).ok_or_else(|| Notice::NotNumeric(column.to_string()))?;
        histogram::compute(&values, options).ok_or(Notice::NothingToVisualize)
    }

    /// Missing-value count for every column, including those with none.
    pub fn missing_values(&self) -> Vec<MissingCount> {
        self.df
            .get_columns()
            .iter()
            .map(|c| MissingCount {
                column: c.name().to_string(),
                missing: c.null_count(),
            })
            .collect()
    }
}

impl PartialEq for Table {
    fn eq(&self, other: &Self) -> bool {
        self.df.equals_missing(&other.df)
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (rows, columns) = self.shape();
        f.debug_struct("Table")
            .field("rows", &rows)
            .field("columns", &columns)
            .field("dtypes", &self.dtypes())
            .finish()
    }
}

fn normalize_column(column: &Column) -> PolarsResult<Column> {
    let name = column.name().clone();

    if column.len() > 0 && column.null_count() == column.len() {
        return Ok(Series::full_null(name, column.len(), &DataType::Float64).into_column());
    }

    if column.dtype().is_float() {
        let floats = column.cast(&DataType::Float64)?;
        let cleaned: Float64Chunked = floats
            .as_materialized_series()
            .f64()?
            .into_iter()
            .map(|v| v.filter(|x| !x.is_nan()))
            .collect();
        return Ok(cleaned.with_name(name).into_column());
    }

    Ok(column.clone())
}

/// Non-null values of a numeric column as `f64`, in row order.
pub(crate) fn float_values(column: &Column) -> Option<Float64Chunked> {
    if !Dtype::of(column.dtype()).is_numeric() {
        return None;
    }
    let floats = column.cast(&DataType::Float64).ok()?;
    floats.as_materialized_series().f64().ok().cloned()
}

fn numeric_values(column: &Column) -> Option<Vec<f64>> {
    float_values(column).map(|ca| ca.into_iter().flatten().collect())
}
