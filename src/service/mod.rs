//! Service layer for synchronizing and caching the mirrored datasets.
//!
//! This module contains the sync orchestrator together with the collaborator seams it
//! drives: remote dataset fetching, version comparison and the cache store. Each seam is a
//! trait with one bundled implementation so the orchestrator can be exercised against stubs.

pub mod remote;
pub mod store;
pub mod sync;
pub mod version;

#[cfg(test)]
mod tests;
