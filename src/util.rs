// Console logging and small formatting helpers.
//
// Logging is a no-op off wasm so core code stays testable natively.

#[cfg(target_arch = "wasm32")]
pub fn clog(msg: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn clog(msg: &str) {
    let _ = msg;
}

#[cfg(target_arch = "wasm32")]
pub fn cwarn(msg: &str) {
    web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn cwarn(msg: &str) {
    let _ = msg;
}

#[cfg(target_arch = "wasm32")]
pub fn cerror(msg: &str) {
    web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(msg));
}

#[cfg(not(target_arch = "wasm32"))]
pub fn cerror(msg: &str) {
    let _ = msg;
}

/// 15420 -> "15 420"
pub fn format_score(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

pub fn format_reward(xp: i64, score: i64) -> String {
    format!("+{} XP • +{} points", xp, score)
}
