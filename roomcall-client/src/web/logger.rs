use wasm_bindgen::JsValue;
use web_sys::console;

/// Browser console output for the call client. Every line is tagged so it can
/// be filtered out of the SDK's own logging.
pub struct Logger;

impl Logger {
    const TAG: &'static str = "roomcall";

    pub fn info(msg: &str) {
        console::info_2(&Self::prefix("INFO"), &JsValue::from_str(msg));
    }

    pub fn warn(msg: &str) {
        console::warn_2(&Self::prefix("WARN"), &JsValue::from_str(msg));
    }

    /// Logs the JS value itself so devtools keeps an error's stack.
    pub fn error(err: &JsValue) {
        console::error_2(&Self::prefix("ERROR"), err);
    }

    fn prefix(level: &str) -> JsValue {
        JsValue::from_str(&format!("[{}] [{}]", Self::TAG, level))
    }
}
