//! Time helpers
//!
//! All timestamps are `i64` Unix millis; the repository layer never touches
//! wall-clock types directly.

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
