//! Version record error types.
//!
//! These errors indicate that the version bookkeeping was driven out of order, e.g. a
//! version file write requested before any remote metadata was fetched. They point at a bug
//! in the caller rather than at the network or the filesystem.

use thiserror::Error;

/// Version record error type.
#[derive(Error, Debug)]
pub enum VersionError {
    /// The version file was asked to be written before remote metadata was fetched.
    #[error("Remote version metadata has not been fetched yet")]
    NotFetched,
    /// Remote metadata was fetched for comparison only and cannot be persisted.
    ///
    /// Happens when `fetch(false)` was used, as done by update checks, and a version file
    /// write follows without a new `fetch(true)`.
    #[error("Remote version metadata was fetched without data and cannot be persisted")]
    RecordNotRetained,
}
