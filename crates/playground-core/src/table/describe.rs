//! Descriptive statistics for numeric columns.
//!
//! Matches the usual `describe()` table: count, mean, sample standard
//! deviation (n - 1), min, quartiles with linear interpolation, max.
//! Text columns are left out entirely.

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use super::{float_values, Table};

/// One row of the describe table.
///
/// Statistics that are undefined for the available count are `None`:
/// everything when `count == 0`, and `std` when `count == 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSummary {
    pub column: String,
    pub count: usize,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub min: Option<f64>,
    #[serde(rename = "25%")]
    pub q25: Option<f64>,
    #[serde(rename = "50%")]
    pub median: Option<f64>,
    #[serde(rename = "75%")]
    pub q75: Option<f64>,
    pub max: Option<f64>,
}

impl ColumnSummary {
    /// Summarize the non-null values of a float column.
    pub fn from_chunked(column: impl Into<String>, values: &Float64Chunked) -> Self {
        let count = values.len() - values.null_count();
        let quantile = |q: f64| {
            values
                .quantile(q, QuantileMethod::Linear)
                .ok()
                .flatten()
        };

        Self {
            column: column.into(),
            count,
            mean: values.mean(),
            std: if count > 1 { values.std(1) } else { None },
            min: values.min(),
            q25: quantile(0.25),
            median: quantile(0.5),
            q75: quantile(0.75),
            max: values.max(),
        }
    }
}

/// The describe table: one summary per numeric column, in column order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Describe {
    pub columns: Vec<ColumnSummary>,
}

pub(super) fn describe(table: &Table) -> Describe {
    let columns = table
        .frame()
        .get_columns()
        .iter()
        .filter_map(|col| {
            float_values(col).map(|values| ColumnSummary::from_chunked(col.name().as_str(), &values))
        })
        .collect();
    Describe { columns }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|a| (a - b).abs() < 1e-9)
    }

    fn summary(values: &[f64]) -> ColumnSummary {
        ColumnSummary::from_chunked("v", &Float64Chunked::from_slice("v".into(), values))
    }

    fn table(df: PolarsResult<DataFrame>) -> Table {
        Table::from_frame(df.unwrap()).unwrap()
    }

    #[test]
    fn test_summary_one_to_ten() {
        let values: Vec<f64> = (1..=10).map(|i| i as f64).collect();
        let s = summary(&values);

        assert_eq!(s.count, 10);
        assert!(close(s.mean, 5.5));
        // Sample std of 1..=10
        assert!(close(s.std, 3.0276503540974917));
        assert!(close(s.min, 1.0));
        assert!(close(s.q25, 3.25));
        assert!(close(s.median, 5.5));
        assert!(close(s.q75, 7.75));
        assert!(close(s.max, 10.0));
    }

    #[test]
    fn test_summary_unsorted_input() {
        let s = summary(&[5.0, 1.0, 3.0]);
        assert!(close(s.min, 1.0));
        assert!(close(s.median, 3.0));
        assert!(close(s.max, 5.0));
        assert!(close(s.std, 2.0));
    }

    #[test]
    fn test_summary_single_value() {
        let s = summary(&[4.0]);
        assert_eq!(s.count, 1);
        assert!(close(s.mean, 4.0));
        assert_eq!(s.std, None);
        assert!(close(s.q25, 4.0));
    }

    #[test]
    fn test_summary_no_values() {
        let s = summary(&[]);
        assert_eq!(s.count, 0);
        assert_eq!(s.mean, None);
        assert_eq!(s.std, None);
        assert_eq!(s.min, None);
        assert_eq!(s.max, None);
    }

    #[test]
    fn test_describe_excludes_text() {
        let d = table(df!("label" => ["a", "b"], "value" => [2i64, 4])).describe();

        assert_eq!(d.columns.len(), 1);
        assert_eq!(d.columns[0].column, "value");
        assert!(close(d.columns[0].mean, 3.0));
    }

    #[test]
    fn test_describe_ignores_nulls() {
        let d = table(df!("x" => [Some(1.0), None, Some(3.0)])).describe();
        let s = &d.columns[0];
        assert_eq!(s.count, 2);
        assert!(close(s.mean, 2.0));
    }

    #[test]
    fn test_describe_all_text_is_empty() {
        assert!(table(df!("t" => ["x"])).describe().columns.is_empty());
    }

    #[test]
    fn test_quartiles_interpolate() {
        let s = summary(&[0.0, 10.0]);
        assert!(close(s.q25, 2.5));
        assert!(close(s.q75, 7.5));
    }
}
