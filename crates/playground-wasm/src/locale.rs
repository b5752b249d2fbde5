//! Label table bindings for the language selector.

use playground_core::locale::UnknownLocale;
use playground_core::{Locale, Notice};
use wasm_bindgen::prelude::*;

/// Keys for the language selector, in display order.
#[wasm_bindgen]
pub fn locale_keys() -> Vec<String> {
    Locale::ALL.iter().map(|l| l.key().to_string()).collect()
}

/// All labels for a language as a plain object (`labels.apply`, ...).
///
/// # Errors
///
/// Returns an error for a key other than "English" or "Indonesia".
#[wasm_bindgen]
pub fn labels(locale: &str) -> Result<JsValue, JsValue> {
    let locale = parse_locale(locale).map_err(to_js)?;
    serde_wasm_bindgen::to_value(locale.labels())
        .map_err(|e| JsValue::from_str(&format!("Failed to serialize labels: {}", e)))
}

/// One label by key, or `undefined` for an unknown key.
#[wasm_bindgen]
pub fn label(locale: &str, key: &str) -> Result<Option<String>, JsValue> {
    lookup(locale, key).map_err(to_js)
}

/// Localized text for a `Notice` returned by `JsSession.dispatch`.
#[wasm_bindgen]
pub fn notice_text(locale: &str, notice: JsValue) -> Result<String, JsValue> {
    let locale = parse_locale(locale).map_err(to_js)?;
    let notice = parse_notice(notice)?;
    Ok(locale.labels().notice(&notice).to_string())
}

/// Whether a `Notice` should be styled as a warning rather than as info.
#[wasm_bindgen]
pub fn notice_is_warning(notice: JsValue) -> Result<bool, JsValue> {
    Ok(parse_notice(notice)?.is_warning())
}

fn parse_locale(locale: &str) -> Result<Locale, UnknownLocale> {
    locale.parse()
}

fn lookup(locale: &str, key: &str) -> Result<Option<String>, UnknownLocale> {
    Ok(parse_locale(locale)?.labels().get(key).map(str::to_string))
}

fn parse_notice(notice: JsValue) -> Result<Notice, JsValue> {
    serde_wasm_bindgen::from_value(notice)
        .map_err(|e| JsValue::from_str(&format!("Invalid notice: {}", e)))
}

fn to_js(e: UnknownLocale) -> JsValue {
    JsValue::from_str(&e.to_string())
}
