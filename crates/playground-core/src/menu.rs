//! Data explorer menu: five actions dispatched against a [`Session`].

use serde::{Deserialize, Serialize};

use crate::session::Session;
use crate::table::{
    ColumnDtype, Describe, HistogramData, HistogramOptions, MissingCount, Table, TableError,
};
use crate::Notice;

/// One entry of the sidebar menu.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuAction {
    /// Landing page; needs no data.
    Home,
    /// Parse an uploaded CSV and store it in the session.
    UploadData(Vec<u8>),
    /// Shape, dtypes and descriptive statistics.
    Summary,
    /// Histogram of one numeric column. `None` picks the first numeric column.
    Visualize {
        column: Option<String>,
        options: HistogramOptions,
    },
    /// Missing-value count per column.
    MissingValues,
}

/// Shape, dtypes and describe table together, as the summary page shows them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSummary {
    pub rows: usize,
    pub columns: usize,
    pub dtypes: Vec<ColumnDtype>,
    pub describe: Describe,
}

impl DataSummary {
    pub fn of(table: &Table) -> Self {
        let (rows, columns) = table.shape();
        Self {
            rows,
            columns,
            dtypes: table.dtypes(),
            describe: table.describe(),
        }
    }
}

/// What the UI should render after an action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub enum MenuOutcome {
    Home,
    Loaded { rows: usize, columns: usize },
    Summary(DataSummary),
    Histogram {
        column: String,
        numeric_columns: Vec<String>,
        histogram: HistogramData,
    },
    MissingValues(Vec<MissingCount>),
    /// A warning or message instead of content.
    Notice(Notice),
}

/// Run a menu action.
///
/// Missing data and empty selections come back as [`MenuOutcome::Notice`].
/// Only a CSV the reader rejects is an error.
pub fn dispatch(action: MenuAction, session: &mut Session) -> Result<MenuOutcome, TableError> {
    let outcome = match action {
        MenuAction::Home => MenuOutcome::Home,
        MenuAction::UploadData(bytes) => {
            let table = Table::from_csv_bytes(&bytes)?;
            let (rows, columns) = table.shape();
            session.set(table);
            MenuOutcome::Loaded { rows, columns }
        }
        MenuAction::Summary => match session.require() {
            Ok(table) => MenuOutcome::Summary(DataSummary::of(table)),
            Err(notice) => MenuOutcome::Notice(notice),
        },
        MenuAction::Visualize { column, options } => match session.require() {
            Ok(table) => visualize(table, column, &options),
            Err(notice) => MenuOutcome::Notice(notice),
        },
        MenuAction::MissingValues => match session.require() {
            Ok(table) => MenuOutcome::MissingValues(table.missing_values()),
            Err(notice) => MenuOutcome::Notice(notice),
        },
    };
    Ok(outcome)
}

fn visualize(table: &Table, column: Option<String>, options: &HistogramOptions) -> MenuOutcome {
    let numeric_columns: Vec<String> = table
        .numeric_columns()
        .into_iter()
        .map(str::to_string)
        .collect();

    let Some(column) = column.or_else(|| numeric_columns.first().cloned()) else {
        log::info!("no numeric columns to visualize");
        return MenuOutcome::Notice(Notice::NothingToVisualize);
    };

    match table.histogram(&column, options) {
        Ok(histogram) => MenuOutcome::Histogram {
            column,
            numeric_columns,
            histogram,
        },
        Err(notice) => MenuOutcome::Notice(notice),
    }
}
