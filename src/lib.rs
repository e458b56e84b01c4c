//! Local mirror of Azur Lane ship and equipment data.
//!
//! This crate keeps an on-disk copy of the AzurAPI ship and equipment datasets in sync with
//! the upstream source and loads that copy into an in-memory cache. The work is a fixed,
//! sequential orchestration: prepare the data directory, compare version metadata, download
//! whichever datasets are stale, persist them, then refresh the cache from disk.
//!
//! The entry point is [`service::sync::DataSyncOrchestrator`], which is built from a
//! [`data::local::PreparedDataDir`] and three collaborators: a
//! [`service::version::VersionComparator`], a [`service::remote::RemoteFetcher`] and a
//! [`service::store::CacheStore`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
pub mod util;
