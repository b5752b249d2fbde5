//! Data explorer WASM bindings.
//!
//! The page keeps one `JsSession` per browser tab and routes every menu
//! click through [`JsSession::dispatch`].
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const session = new JsSession();
//! session.dispatch({ kind: 'UploadData' }, new Uint8Array(await file.arrayBuffer()));
//!
//! const outcome = session.dispatch({ kind: 'Visualize', column: 'age', bins: 10 });
//! switch (outcome.kind) {
//!   case 'Histogram': drawBars(outcome.data.histogram); break;
//!   case 'Notice': showNotice(outcome.data); break;
//! }
//! ```

use playground_core::menu::{dispatch, MenuAction};
use playground_core::table::HistogramOptions;
use playground_core::{Session, Table};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

/// Menu request as sent from JavaScript.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "kind")]
enum MenuRequest {
    Home,
    UploadData,
    Summary,
    Visualize {
        #[serde(default)]
        column: Option<String>,
        #[serde(default)]
        bins: Option<usize>,
    },
    MissingValues,
}

impl MenuRequest {
    fn into_action(self, csv: Option<Vec<u8>>) -> Result<MenuAction, String> {
        Ok(match self {
            MenuRequest::Home => MenuAction::Home,
            MenuRequest::UploadData => {
                MenuAction::UploadData(csv.ok_or("UploadData requires the CSV file bytes")?)
            }
            MenuRequest::Summary => MenuAction::Summary,
            MenuRequest::Visualize { column, bins } => MenuAction::Visualize {
                column,
                options: bins.map_or_else(HistogramOptions::default, HistogramOptions::with_bins),
            },
            MenuRequest::MissingValues => MenuAction::MissingValues,
        })
    }
}

/// One user's data explorer state.
#[wasm_bindgen]
pub struct JsSession {
    inner: Session,
}

#[wasm_bindgen]
impl JsSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            inner: Session::new(),
        }
    }

    /// Whether a CSV has been loaded.
    #[wasm_bindgen(getter)]
    pub fn has_data(&self) -> bool {
        self.inner.has_table()
    }

    /// Column names for the histogram selector (empty without data).
    pub fn numeric_columns(&self) -> Vec<String> {
        self.inner
            .get()
            .map(|t| t.numeric_columns().into_iter().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Forget the loaded table.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Parse a CSV upload and make it the session's table.
    ///
    /// Returns `[rows, columns]`.
    ///
    /// # Errors
    ///
    /// Returns an error for ragged rows, invalid UTF-8 or a missing header.
    pub fn load_csv(&mut self, bytes: &[u8]) -> Result<Vec<usize>, JsValue> {
        let table = Table::from_csv_bytes(bytes).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let (rows, columns) = table.shape();
        self.inner.set(table);
        Ok(vec![rows, columns])
    }

    /// `[rows, columns]`, or `undefined` without data.
    pub fn shape(&self) -> Result<JsValue, JsValue> {
        self.view(Table::shape)
    }

    /// `[{ column, dtype }]`, or `undefined` without data.
    pub fn dtypes(&self) -> Result<JsValue, JsValue> {
        self.view(Table::dtypes)
    }

    /// Summary statistics of the numeric columns, or `undefined` without data.
    pub fn describe(&self) -> Result<JsValue, JsValue> {
        self.view(Table::describe)
    }

    /// `[{ column, missing }]`, or `undefined` without data.
    pub fn missing_values(&self) -> Result<JsValue, JsValue> {
        self.view(Table::missing_values)
    }

    /// Histogram of one column, as the `Visualize` menu outcome.
    pub fn histogram(&mut self, column: Option<String>, bins: Option<usize>) -> Result<JsValue, JsValue> {
        let request = MenuRequest::Visualize { column, bins };
        self.run(request, None)
    }

    /// Run a menu action and return `{ kind, data }` for the page to render.
    ///
    /// # Errors
    ///
    /// Returns an error for a malformed request or a CSV the reader rejects.
    /// Missing data is not an error; it comes back as `{ kind: 'Notice' }`.
    pub fn dispatch(&mut self, request: JsValue, csv: Option<Vec<u8>>) -> Result<JsValue, JsValue> {
        let request: MenuRequest = serde_wasm_bindgen::from_value(request)
            .map_err(|e| JsValue::from_str(&format!("Invalid menu request: {}", e)))?;
        self.run(request, csv)
    }
}

impl JsSession {
    fn run(&mut self, request: MenuRequest, csv: Option<Vec<u8>>) -> Result<JsValue, JsValue> {
        let action = request.into_action(csv).map_err(|e| JsValue::from_str(&e))?;

        let outcome =
            dispatch(action, &mut self.inner).map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_wasm_bindgen::to_value(&outcome)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize outcome: {}", e)))
    }

    fn view<T: Serialize>(&self, f: impl FnOnce(&Table) -> T) -> Result<JsValue, JsValue> {
        match self.inner.require() {
            Ok(table) => serde_wasm_bindgen::to_value(&f(table))
                .map_err(|e| JsValue::from_str(&format!("Failed to serialize table view: {}", e))),
            Err(_) => Ok(JsValue::UNDEFINED),
        }
    }
}

impl Default for JsSession {
    fn default() -> Self {
        Self::new()
    }
}
