//! Data fixtures.
//!
//! `DataFixtures` borrows the test context to write local data files and register mock
//! endpoints on its server. Record factories live in [`factory`].

pub mod factory;
pub mod mockito;

use std::fs;

use serde_json::Value;

use crate::{
    constant::VERSION_FILE, context::TestContext, error::TestError,
};

pub struct DataFixtures<'a> {
    pub(crate) setup: &'a mut TestContext,
}

impl<'a> DataFixtures<'a> {
    pub fn new(setup: &'a mut TestContext) -> Self {
        Self { setup }
    }

    /// Write a file into the data directory, creating the directory if needed.
    pub fn write_local_file(&self, name: &str, content: &str) -> Result<(), TestError> {
        let dir = self.setup.data_dir();
        fs::create_dir_all(&dir)?;
        fs::write(dir.join(name), content)?;

        Ok(())
    }

    /// Write a local version record.
    pub fn write_local_version(&self, record: &Value) -> Result<(), TestError> {
        self.write_local_file(VERSION_FILE, &serde_json::to_string(record)?)
    }

    pub fn read_local_file(&self, name: &str) -> Result<String, TestError> {
        Ok(fs::read_to_string(self.setup.data_dir().join(name))?)
    }

    /// Read and parse a file from the data directory.
    pub fn read_local_json(&self, name: &str) -> Result<Value, TestError> {
        Ok(serde_json::from_str(&self.read_local_file(name)?)?)
    }
}
