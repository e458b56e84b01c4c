//! Result types returned by the data directory and the sync orchestrator.

use std::path::PathBuf;

/// Whether the remote source holds newer data than the local copy, per dataset kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UpdateAvailability {
    /// Remote ship data differs from the local copy.
    pub ship_update_available: bool,
    /// Remote equipment data differs from the local copy.
    pub equipment_update_available: bool,
}

impl UpdateAvailability {
    /// True when at least one dataset kind has an update.
    pub fn any(&self) -> bool {
        self.ship_update_available || self.equipment_update_available
    }
}

/// What a data directory initialization actually did.
///
/// A second initialization of the same directory reports no work.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InitOutcome {
    /// The data directory itself had to be created.
    pub created_dir: bool,
    /// Files that were absent and got written with `{}`.
    pub created_files: Vec<PathBuf>,
}

impl InitOutcome {
    /// True when the directory or any of the files was created.
    pub fn performed_work(&self) -> bool {
        self.created_dir || !self.created_files.is_empty()
    }
}

/// Record counts loaded into the cache and the files they were read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheReport {
    /// Number of ship records held by the store after loading.
    pub ships_loaded: usize,
    /// File the ship records were read from.
    pub ships_source: PathBuf,
    /// Number of equipment records held by the store after loading.
    pub equipments_loaded: usize,
    /// File the equipment records were read from.
    pub equipments_source: PathBuf,
}
