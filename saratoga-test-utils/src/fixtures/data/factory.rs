//! Record factories.
//!
//! Records only carry the handful of fields tests look at; saratoga treats them as opaque.

use serde_json::{json, Value};

/// Refresh date used by [`mock_version_entry`], 2023-11-14T22:13:20Z in epoch milliseconds.
pub const MOCK_REFRESH_DATE: i64 = 1_700_000_000_000;

pub fn mock_ship(id: u32) -> Value {
    json!({
        "id": id.to_string(),
        "names": { "en": format!("Ship {}", id) },
        "rarity": "Elite",
    })
}

/// Array of ships, in the given order.
pub fn mock_ships(ids: &[u32]) -> Value {
    Value::Array(ids.iter().map(|id| mock_ship(*id)).collect())
}

pub fn mock_equipment(id: u32) -> Value {
    json!({
        "id": id.to_string(),
        "names": { "en": format!("Equipment {}", id) },
        "category": "Destroyer Guns",
    })
}

/// Array of equipments, in the given order.
pub fn mock_equipments(ids: &[u32]) -> Value {
    Value::Array(ids.iter().map(|id| mock_equipment(*id)).collect())
}

/// Version entry for a single dataset.
pub fn mock_version_entry(version_number: u32) -> Value {
    json!({
        "version-number": version_number,
        "last-data-refresh-date": MOCK_REFRESH_DATE,
        "hash": format!("{:08x}", version_number),
    })
}

/// Version record holding an entry for both datasets.
pub fn mock_version(ships_version: u32, equipments_version: u32) -> Value {
    json!({
        "ships": mock_version_entry(ships_version),
        "equipments": mock_version_entry(equipments_version),
    })
}
