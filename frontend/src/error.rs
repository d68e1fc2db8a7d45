use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures talking to the browser. None of them reach the user; callers log and move on.
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("no window available")]
    NoWindow,
    #[error("the browser refused to open a new tab")]
    PopupBlocked,
    #[error("failed to register {event} listener: {reason}")]
    Listener { event: &'static str, reason: String },
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for BrowserError {
    fn from(value: JsValue) -> Self {
        BrowserError::Js(describe(&value))
    }
}

pub fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
