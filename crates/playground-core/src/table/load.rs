//! CSV reading through the polars CSV reader.

use std::io::Cursor;

use polars::prelude::*;

use super::{Table, TableError};

/// Cell contents read as missing values.
///
/// Every capitalisation of `nan` (optionally signed) is added on top of these,
/// since the number parser would otherwise accept it as a float NaN.
pub const NULL_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "1.#IND", "1.#QNAN", "<NA>", "N/A",
    "NA", "NULL", "None", "n/a", "null",
];

pub(super) fn read_csv(bytes: &[u8]) -> Result<Table, TableError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(TableError::Empty);
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .map_parse_options(|opts| opts.with_null_values(Some(null_values())))
        .into_reader_with_file_handle(Cursor::new(bytes.to_vec()))
        .finish()?;

    let table = Table::from_frame(df)?;
    let (rows, cols) = table.shape();
    log::debug!("loaded CSV table with {} rows and {} columns", rows, cols);
    Ok(table)
}

fn null_values() -> NullValues {
    let tokens = NULL_TOKENS
        .iter()
        .copied()
        .map(PlSmallStr::from_static)
        .chain(nan_spellings().map(PlSmallStr::from))
        .collect();
    NullValues::AllColumns(tokens)
}

/// `nan`, `NaN`, `NAN`, `-nan`, `+nAn`, ...
fn nan_spellings() -> impl Iterator<Item = String> {
    (0..8u8).flat_map(|mask| {
        let word: String = "nan"
            .chars()
            .enumerate()
            .map(|(i, c)| {
                if mask & (1 << i) != 0 {
                    c.to_ascii_uppercase()
                } else {
                    c
                }
            })
            .collect();
        ["", "-", "+"].map(|sign| format!("{}{}", sign, word))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Dtype;

    fn load(text: &str) -> Table {
        read_csv(text.as_bytes()).unwrap()
    }

    fn dtypes(t: &Table) -> Vec<Dtype> {
        t.dtypes().into_iter().map(|d| d.dtype).collect()
    }

    fn missing(t: &Table) -> Vec<usize> {
        t.missing_values().into_iter().map(|m| m.missing).collect()
    }

    #[test]
    fn test_header_names_and_shape() {
        let t = load("a,b,c\n1,2,3\n4,5,6\n");
        assert_eq!(t.shape(), (2, 3));
        let names: Vec<_> = t.dtypes().into_iter().map(|d| d.column).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_inference() {
        let t = load("int,float,text,mixed\n1,1.5,x,1\n2,2,y,two\n");
        assert_eq!(
            dtypes(&t),
            vec![Dtype::Int64, Dtype::Float64, Dtype::Object, Dtype::Object]
        );
    }

    #[test]
    fn test_integer_with_null_stays_integer() {
        let t = load("n\n1\nNA\n3\n");
        assert_eq!(dtypes(&t), vec![Dtype::Int64]);
        assert_eq!(missing(&t), vec![1]);
    }

    #[test]
    fn test_null_tokens() {
        let t = load("a,b\nNA,1\n,2\nnull,3\nN/A,4\nNaN,5\nreal,6\n");
        assert_eq!(missing(&t), vec![5, 0]);
        assert_eq!(dtypes(&t), vec![Dtype::Object, Dtype::Int64]);
    }

    #[test]
    fn test_nan_in_any_case_is_missing() {
        for spelling in ["NAN", "nAn", "Nan", "-NaN", "nan"] {
            let t = load(&format!("x\n1\n{}\n3\n", spelling));
            assert!(dtypes(&t)[0].is_numeric(), "{} kept x numeric", spelling);
            assert_eq!(missing(&t), vec![1], "{} counted as missing", spelling);

            let summary = &t.describe().columns[0];
            assert_eq!(summary.count, 2);
            assert_eq!(summary.mean, Some(2.0));
            assert_eq!(summary.max, Some(3.0));
        }
    }

    #[test]
    fn test_nan_spellings() {
        let spellings: Vec<String> = nan_spellings().collect();
        assert_eq!(spellings.len(), 24);
        for s in ["nan", "NaN", "NAN", "nAn", "-nan", "+NAN"] {
            assert!(spellings.iter().any(|x| x == s), "missing {}", s);
        }
    }

    #[test]
    fn test_all_null_column_is_float() {
        let t = load("a,b\nNA,1\nNA,2\n");
        assert_eq!(dtypes(&t), vec![Dtype::Float64, Dtype::Int64]);
        assert_eq!(missing(&t), vec![2, 0]);
    }

    #[test]
    fn test_header_only_is_object() {
        let t = load("a,b\n");
        assert_eq!(t.shape(), (0, 2));
        assert_eq!(dtypes(&t), vec![Dtype::Object, Dtype::Object]);
    }

    #[test]
    fn test_quoted_fields() {
        let t = load("name,note\n\"Smith, J\",\"said \"\"hi\"\"\"\n");
        let frame = t.frame();
        let name = frame.column("name").unwrap().as_materialized_series().str().unwrap().get(0);
        let note = frame.column("note").unwrap().as_materialized_series().str().unwrap().get(0);
        assert_eq!(name, Some("Smith, J"));
        assert_eq!(note, Some("said \"hi\""));
    }

    #[test]
    fn test_empty_file() {
        assert!(matches!(read_csv(b""), Err(TableError::Empty)));
        assert!(matches!(read_csv(b" \n"), Err(TableError::Empty)));
    }

    #[test]
    fn test_extra_fields_rejected() {
        let result = read_csv(b"a,b\n1,2\n3,4,5\n");
        assert!(matches!(result, Err(TableError::Read(_))));
    }
}
