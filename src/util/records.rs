//! Conversion of parsed dataset files into cache records.

use serde_json::Value;

/// Turns a parsed dataset file into an ordered list of records.
///
/// Upstream data files have been published both as arrays and as objects keyed by record
/// ID, and a freshly prepared file holds `{}`. The conversion is deliberately lenient:
///
/// - `Value::Array` - each element is a record, in order
/// - `Value::Object` - each value is a record, in key order; `{}` yields no records
/// - anything else - no records
///
/// # Arguments
/// - `value` - Parsed content of a local dataset file
///
/// # Returns
/// The records contained in `value`, possibly empty.
pub fn records_from_value(value: Value) -> Vec<Value> {
    match value {
        Value::Array(records) => records,
        Value::Object(map) => map.into_iter().map(|(_, record)| record).collect(),
        _ => Vec::new(),
    }
}
