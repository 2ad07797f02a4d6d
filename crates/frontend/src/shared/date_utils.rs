//! Utilities for date and time formatting
//!
//! Timestamps arrive in UTC and are shown in the viewer's timezone.

use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;

const DATETIME_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Format a UTC timestamp as DD.MM.YYYY HH:MM:SS in the given timezone
/// Example: 2024-03-15T14:02:26Z in UTC+3 -> "15.03.2024 17:02:26"
pub fn format_datetime_in<Tz>(value: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    value.with_timezone(tz).format(DATETIME_FORMAT).to_string()
}

/// Format a UTC timestamp with the browser's locale and timezone
#[cfg(target_arch = "wasm32")]
pub fn format_local_datetime(value: &DateTime<Utc>) -> String {
    let millis = wasm_bindgen::JsValue::from_f64(value.timestamp_millis() as f64);
    js_sys::Date::new(&millis)
        .to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

/// Format a UTC timestamp in the host timezone
#[cfg(not(target_arch = "wasm32"))]
pub fn format_local_datetime(value: &DateTime<Utc>) -> String {
    format_datetime_in(value, &chrono::Local)
}
