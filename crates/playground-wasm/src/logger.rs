//! Browser console logging for the `log` facade.
//!
//! The core crate logs through `log` macros; `console_log` forwards those
//! records to the browser console.

use std::str::FromStr;

use log::{Level, LevelFilter};
use wasm_bindgen::prelude::*;

/// Level used when the page does not pick one.
pub const DEFAULT_LEVEL: Level = Level::Info;

/// Install the console logger. Safe to call more than once.
pub(crate) fn install(level: Level) {
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}

fn parse_level(level: &str) -> Result<LevelFilter, String> {
    LevelFilter::from_str(level).map_err(|_| format!("Unknown log level: {}", level))
}

/// Change the console log level ("off", "error", "warn", "info", "debug", "trace").
#[wasm_bindgen]
pub fn set_log_level(level: &str) -> Result<(), JsValue> {
    let filter = parse_level(level).map_err(|e| JsValue::from_str(&e))?;
    log::set_max_level(filter);
    Ok(())
}
