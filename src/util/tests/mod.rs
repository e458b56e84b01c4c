use serde_json::json;

use crate::util::{records::records_from_value, time::timestamp_from_millis};
