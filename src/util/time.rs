//! Timestamp conversion helpers.

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Converts a JSON number of milliseconds since the Unix epoch into a UTC timestamp.
///
/// Version entries published upstream carry their refresh date in this form. Values that
/// are not integers, or that fall outside the range chrono can represent, yield `None`.
///
/// # Example
/// ```ignore
/// let at = timestamp_from_millis(&json!(1_700_000_000_000i64)).unwrap();
/// assert_eq!(at.to_rfc3339(), "2023-11-14T22:13:20+00:00");
/// ```
pub fn timestamp_from_millis(value: &Value) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(value.as_i64()?)
}
