//! Preparation of and reads from the local data directory.
//!
//! The directory is prepared synchronously, before anything else touches it, so no read can
//! race the creation of a missing file. Code that needs the files can only get hold of them
//! through a [`PreparedDataDir`], which only [`initialize`] hands out.

use std::{
    fs::OpenOptions,
    io::{ErrorKind, Write},
    path::Path,
};

use dioxus_logger::tracing::debug;
use serde_json::Value;

use crate::{
    data::paths::{DataPaths, EMPTY_RECORD},
    error::Error,
    model::{dataset::DatasetKind, sync::InitOutcome},
};

/// A data directory known to contain the version record and both dataset files.
#[derive(Debug, Clone)]
pub struct PreparedDataDir {
    paths: DataPaths,
    outcome: InitOutcome,
}

/// Ensures the data directory and its three files exist.
///
/// Creates the directory when absent, then writes `{}` to each of the version, ship and
/// equipment files that does not exist yet. Files that already exist are left untouched
/// regardless of their content, so running this again on a prepared directory changes
/// nothing and reports no work.
///
/// # Arguments
/// - `paths` - Layout of the data directory to prepare
///
/// # Returns
/// - `Ok(PreparedDataDir)` - Directory is ready; [`PreparedDataDir::outcome`] tells what was created
/// - `Err(Error::Io)` - Directory or file creation failed (e.g. permission denied)
pub fn initialize(paths: DataPaths) -> Result<PreparedDataDir, Error> {
    let mut outcome = InitOutcome::default();

    if !paths.folder().try_exists()? {
        std::fs::create_dir_all(paths.folder())?;
        debug!("Created data directory {}", paths.folder().display());
        outcome.created_dir = true;
    }

    for file in paths.all_files() {
        // create_new makes the existence check and the write a single step
        match OpenOptions::new().write(true).create_new(true).open(&file) {
            Ok(handle) => {
                write_placeholder(handle, &file)?;
                debug!("Created empty data file {}", file.display());
                outcome.created_files.push(file);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {}
            Err(e) => return Err(e.into()),
        }
    }

    Ok(PreparedDataDir { paths, outcome })
}

/// Writes `{}` into a freshly created file, removing the file again if the write fails.
///
/// A half-written file would count as existing on the next startup and never be rewritten.
pub(crate) fn write_placeholder(mut handle: impl Write, file: &Path) -> Result<(), Error> {
    if let Err(e) = handle.write_all(EMPTY_RECORD.as_bytes()) {
        drop(handle);
        let _ = std::fs::remove_file(file);
        return Err(e.into());
    }

    Ok(())
}

impl PreparedDataDir {
    /// Layout of the prepared directory.
    pub fn paths(&self) -> &DataPaths {
        &self.paths
    }

    /// What the initialization that produced this directory created.
    pub fn outcome(&self) -> &InitOutcome {
        &self.outcome
    }

    /// Reads a dataset file in full and parses it as JSON.
    ///
    /// The value is returned as parsed; no shape validation happens here, so a file holding
    /// `{}` or a non-array object comes back unchanged.
    ///
    /// # Returns
    /// - `Ok(Value)` - Parsed file content
    /// - `Err(Error::Io)` - The file could not be read
    /// - `Err(Error::Json)` - The file is not valid JSON
    pub async fn read_json(&self, kind: DatasetKind) -> Result<Value, Error> {
        let content = tokio::fs::read_to_string(self.paths.data_file(kind)).await?;

        Ok(serde_json::from_str(&content)?)
    }
}
