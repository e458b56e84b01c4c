//! Test context holding the mock server and the temporary data directory.

use std::path::PathBuf;

use mockito::{Mock, Server, ServerGuard};
use tempfile::TempDir;

use crate::{
    constant::{EQUIPMENT_DATA_PATH, SHIP_DATA_PATH, TEST_DATA_DIR, VERSION_PATH},
    error::TestError,
    fixtures::data::DataFixtures,
};

pub struct TestContext {
    pub server: ServerGuard,
    pub dir: TempDir,
    pub mocks: Vec<Mock>,
}

impl TestContext {
    pub async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;
        let dir = TempDir::new()?;

        Ok(Self {
            server,
            dir,
            mocks: Vec::new(),
        })
    }

    /// Access data fixtures (local files and remote endpoints).
    pub fn data(&mut self) -> DataFixtures<'_> {
        DataFixtures::new(self)
    }

    /// Data directory inside the temporary directory. Not created until a local file is
    /// written or saratoga initializes it.
    pub fn data_dir(&self) -> PathBuf {
        self.dir.path().join(TEST_DATA_DIR)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.server.url(), path)
    }

    pub fn version_url(&self) -> String {
        self.url(VERSION_PATH)
    }

    pub fn ship_url(&self) -> String {
        self.url(SHIP_DATA_PATH)
    }

    pub fn equipment_url(&self) -> String {
        self.url(EQUIPMENT_DATA_PATH)
    }

    /// Environment-style variables pointing saratoga at the mock server and data directory.
    pub fn env_vars(&self) -> Vec<(String, String)> {
        vec![
            (
                "SARATOGA_DATA_DIR".to_string(),
                self.data_dir().to_string_lossy().into_owned(),
            ),
            ("SARATOGA_VERSION_URL".to_string(), self.version_url()),
            ("SARATOGA_SHIP_DATA_URL".to_string(), self.ship_url()),
            ("SARATOGA_EQUIPMENT_DATA_URL".to_string(), self.equipment_url()),
        ]
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
