//! Local data directory access.
//!
//! This module owns the on-disk layout of the mirror: where the version record and the two
//! dataset files live, how the directory is prepared on first run, and how the files are
//! read back as JSON.

pub mod local;
pub mod paths;
