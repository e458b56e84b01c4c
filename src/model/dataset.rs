//! Dataset kinds mirrored from the remote source.

use serde::Serialize;
use std::fmt;

/// A category of records synchronized from the remote source.
///
/// The serialized form (`"ships"`, `"equipments"`) is also the key of that dataset's entry
/// in the version record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    /// Ship records.
    Ships,
    /// Equipment records.
    Equipments,
}

impl DatasetKind {
    /// Every dataset kind in processing order.
    ///
    /// Ships are always evaluated, updated and loaded before equipments.
    pub const ALL: [DatasetKind; 2] = [DatasetKind::Ships, DatasetKind::Equipments];

    /// Key of this dataset's entry in the version record.
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKind::Ships => "ships",
            DatasetKind::Equipments => "equipments",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
