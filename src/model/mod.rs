//! Data models shared across the crate.
//!
//! This module contains the dataset kind enum that drives which file, link and store
//! operation a step uses, plus the small result types returned by the orchestrator.

pub mod dataset;
pub mod sync;
