use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = js_sys::Date, js_name = Date)]
    type LocaleDate;

    // no arguments: the browser's own locale and time zone
    #[wasm_bindgen(method, js_class = "Date", js_name = toLocaleString)]
    fn to_locale_string(this: &LocaleDate) -> String;
}

/// Turns an instant into a human readable local date-time.
pub trait LocaleClock {
    /// `None` when the instant cannot be represented.
    fn format_epoch_millis(&self, millis: f64) -> Option<String>;
}

/// Formats with the browser's `Date` in the user's locale and time zone.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserClock;

impl LocaleClock for BrowserClock {
    fn format_epoch_millis(&self, millis: f64) -> Option<String> {
        let date = js_sys::Date::new(&JsValue::from_f64(millis));
        if date.get_time().is_nan() {
            return None;
        }
        Some(date.unchecked_into::<LocaleDate>().to_locale_string())
    }
}
