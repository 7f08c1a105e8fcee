//! Wall-clock access.

use chrono::{DateTime, Utc};

/// Current time from `Date.now()`.
///
/// Falls back to the Unix epoch if the browser reports an out-of-range value.
pub fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}
