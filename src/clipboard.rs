use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    // `navigator.clipboard`, which is missing outside secure contexts
    #[wasm_bindgen(extends = js_sys::Object)]
    type AsyncClipboard;

    #[wasm_bindgen(catch, method, js_name = writeText)]
    fn write_text(this: &AsyncClipboard, data: &str) -> Result<js_sys::Promise, JsValue>;
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClipboardError {
    #[error("no browser window to copy from")]
    NoWindow,

    #[error("clipboard API is not available on this page")]
    Unavailable,

    #[error("clipboard write refused: {0}")]
    WriteRejected(String),
}

/// Puts `text` on the system clipboard. Every failure comes back as an
/// error; nothing is thrown into the caller's task.
pub async fn write_text(text: String) -> Result<(), ClipboardError> {
    let window = web_sys::window().ok_or(ClipboardError::NoWindow)?;
    let property = js_sys::Reflect::get(&window.navigator(), &JsValue::from_str("clipboard")).ok();
    let clipboard = require(property.filter(|v| !v.is_undefined() && !v.is_null()))?
        .unchecked_into::<AsyncClipboard>();

    let pending = clipboard.write_text(&text).map_err(|e| rejected(&e))?;
    JsFuture::from(pending).await.map_err(|e| rejected(&e))?;
    Ok(())
}

fn require<T>(handle: Option<T>) -> Result<T, ClipboardError> {
    handle.ok_or(ClipboardError::Unavailable)
}

fn rejected(value: &JsValue) -> ClipboardError {
    let reason = match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => value.as_string().unwrap_or_else(|| "unknown reason".to_string()),
    };
    ClipboardError::WriteRejected(reason)
}
