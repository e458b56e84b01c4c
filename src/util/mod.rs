//! Utility functions shared by the services.
//!
//! This module provides the JSON-to-record conversion used when loading the cache and the
//! timestamp conversion used when reporting upstream refresh dates.

pub mod records;
pub mod time;

#[cfg(test)]
mod tests;
