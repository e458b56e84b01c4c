//! Error types for the saratoga data mirror.
//!
//! This module provides a single crate-wide [`Error`] with specialized sub-errors for
//! configuration and version bookkeeping. Library errors (filesystem, HTTP, JSON) are wrapped
//! transparently so `?` converts them without losing their original message.

pub mod config;
pub mod version;

use thiserror::Error;

use crate::error::{config::ConfigError, version::VersionError};

/// Main error type for the saratoga crate.
///
/// Nothing inside the orchestrator catches or translates these errors; every failure reaches
/// the immediate caller as-is.
///
/// # Error Categories
/// - Configuration errors (invalid environment variables)
/// - Version bookkeeping errors (persisting a record that was never fetched)
/// - Filesystem errors (data directory preparation, local reads and writes)
/// - HTTP errors (remote dataset and version metadata fetches)
/// - JSON errors (malformed local or remote JSON)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Version record error (persisting before fetching, record not retained).
    #[error(transparent)]
    VersionError(#[from] VersionError),
    /// Filesystem error (directory creation, file read or write).
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// HTTP client error (connection failure, non-success status, body decoding).
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    /// JSON error (malformed data or version file).
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
