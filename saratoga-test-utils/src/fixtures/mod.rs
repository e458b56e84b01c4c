//! Test fixtures for local data files and remote endpoints.

pub mod data;
