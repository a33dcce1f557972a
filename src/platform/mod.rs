//! Platform abstraction layer
//!
//! Date and time strings with a browser/native split: `js_sys::Date` on
//! wasm32, `chrono` elsewhere. Both sides produce the same formats so
//! stored values stay interchangeable.

/// Today's local date at day granularity, e.g. `"Mon Aug 24 2026"`
///
/// Matches the JS `Date.toDateString()` format used as the daily
/// challenge date stamp.
#[cfg(target_arch = "wasm32")]
pub fn today_date_string() -> String {
    js_sys::Date::new_0().to_date_string().into()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn today_date_string() -> String {
    chrono::Local::now().format("%a %b %d %Y").to_string()
}

/// Current UTC time as a millisecond-precision ISO-8601 string
#[cfg(target_arch = "wasm32")]
pub fn now_iso8601() -> String {
    js_sys::Date::new_0().to_iso_string().into()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_iso8601() -> String {
    use chrono::SecondsFormat;
    chrono::Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
