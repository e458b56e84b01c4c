//! Test layout constants.
//!
//! Remote paths mirror the file names of the upstream AzurAPI repository, and local file
//! names mirror the layout of the saratoga data directory. Both are duplicated here rather
//! than imported so this crate does not depend on saratoga itself.

/// Name of the data directory created inside each test's temporary directory.
pub static TEST_DATA_DIR: &str = "data";

/// Mock server path of the remote version record.
pub static VERSION_PATH: &str = "/version-info.json";

/// Mock server path of the remote ship dataset.
pub static SHIP_DATA_PATH: &str = "/ships.json";

/// Mock server path of the remote equipment dataset.
pub static EQUIPMENT_DATA_PATH: &str = "/equipments.json";

pub static VERSION_FILE: &str = "version-info.json";
pub static SHIP_FILE: &str = "ships.json";
pub static EQUIPMENT_FILE: &str = "equipments.json";
