//! Time helpers.
//!
//! Timestamps are carried around as Unix milliseconds and only turned into
//! wall-clock strings at the edge (wire events, admin listings).

use chrono::{DateTime, Local, Utc};

/// Current Unix timestamp in milliseconds.
pub fn current_timestamp() -> i64 {
    Utc::now().timestamp_millis()
}

/// Format a Unix millisecond timestamp as local `HH:mm:ss`.
///
/// Out-of-range values fall back to `00:00:00`.
pub fn timestamp_to_clock(timestamp_millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(timestamp_millis) {
        Some(utc) => utc.with_timezone(&Local).format("%H:%M:%S").to_string(),
        None => "00:00:00".to_string(),
    }
}
