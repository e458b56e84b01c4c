//! Filesystem layout of the data directory.

use std::path::{Path, PathBuf};

use crate::model::dataset::DatasetKind;

/// File name of the local version record.
pub const VERSION_FILE_NAME: &str = "version-info.json";
/// File name of the local ship dataset.
pub const SHIP_FILE_NAME: &str = "ships.json";
/// File name of the local equipment dataset.
pub const EQUIPMENT_FILE_NAME: &str = "equipments.json";

/// Suffix of the temporary file a dataset is staged in before replacing the real one.
pub const STAGING_SUFFIX: &str = ".tmp";

/// Placeholder content written to data files that do not exist yet.
pub const EMPTY_RECORD: &str = "{}";

/// Maps the logical files of the mirror to paths under a single data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    folder: PathBuf,
}

impl DataPaths {
    /// Creates a new instance of [`DataPaths`] rooted at `folder`
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }

    /// The data directory itself.
    pub fn folder(&self) -> &Path {
        &self.folder
    }

    /// Path of the local version record.
    pub fn version_file(&self) -> PathBuf {
        self.folder.join(VERSION_FILE_NAME)
    }

    /// Path of the local ship dataset.
    pub fn ship_file(&self) -> PathBuf {
        self.folder.join(SHIP_FILE_NAME)
    }

    /// Path of the local equipment dataset.
    pub fn equipment_file(&self) -> PathBuf {
        self.folder.join(EQUIPMENT_FILE_NAME)
    }

    /// Path of the dataset file for `kind`.
    pub fn data_file(&self, kind: DatasetKind) -> PathBuf {
        match kind {
            DatasetKind::Ships => self.ship_file(),
            DatasetKind::Equipments => self.equipment_file(),
        }
    }

    /// Temporary file a new `kind` dataset is written to before it replaces [`Self::data_file`].
    ///
    /// Lives in the data directory so the final rename never crosses filesystems.
    pub fn staging_file(&self, kind: DatasetKind) -> PathBuf {
        let name = match kind {
            DatasetKind::Ships => SHIP_FILE_NAME,
            DatasetKind::Equipments => EQUIPMENT_FILE_NAME,
        };
        self.folder.join(format!(".{}{}", name, STAGING_SUFFIX))
    }

    /// Every file the data directory must contain, version record first.
    pub fn all_files(&self) -> [PathBuf; 3] {
        [self.version_file(), self.ship_file(), self.equipment_file()]
    }
}
