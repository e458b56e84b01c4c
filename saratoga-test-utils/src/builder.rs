//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! Configuration methods only queue work; local files are written and mock endpoints created
//! during the final `build()` call.

use mockito::Mock;
use serde_json::Value;

use crate::{context::TestContext, error::TestError};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up a temporary data directory with local files and a
/// mock server with the upstream endpoints. Methods can be chained together and finalized
/// with `build()`.
pub struct TestBuilder {
    // Local files to write (file name, content)
    local_files: Vec<(String, String)>,

    // Local version records to write
    local_versions: Vec<Value>,

    // Custom mock endpoints
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts (body, expected_requests)
    version_endpoints: Vec<(Value, usize)>,
    ship_endpoints: Vec<(Value, usize)>,
    equipment_endpoints: Vec<(Value, usize)>,
    error_endpoints: Vec<(String, usize, usize)>, // (path, status, expected_requests)
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no local files or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            local_files: Vec::new(),
            local_versions: Vec::new(),
            mock_builders: Vec::new(),
            version_endpoints: Vec::new(),
            ship_endpoints: Vec::new(),
            equipment_endpoints: Vec::new(),
            error_endpoints: Vec::new(),
        }
    }

    /// Write a file into the data directory before the test runs.
    ///
    /// The data directory is created if it does not exist yet. Files not written here are
    /// left for saratoga's own initialization to create.
    ///
    /// # Arguments
    /// - `name` - File name inside the data directory (see [`crate::constant`])
    /// - `content` - Exact file content
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_local_file(mut self, name: &str, content: &str) -> Self {
        self.local_files.push((name.to_string(), content.to_string()));
        self
    }

    /// Write a local version record before the test runs.
    ///
    /// Version records are written after the files queued with `with_local_file`.
    pub fn with_local_version(mut self, record: Value) -> Self {
        self.local_versions.push(record);
        self
    }

    /// Add mock version record endpoint to the test server.
    ///
    /// # Arguments
    /// - `record` - Version record served as JSON
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_version_endpoint(mut self, record: Value, expected_requests: usize) -> Self {
        self.version_endpoints.push((record, expected_requests));
        self
    }

    /// Add mock ship dataset endpoint to the test server.
    pub fn with_ship_endpoint(mut self, ships: Value, expected_requests: usize) -> Self {
        self.ship_endpoints.push((ships, expected_requests));
        self
    }

    /// Add mock equipment dataset endpoint to the test server.
    pub fn with_equipment_endpoint(mut self, equipments: Value, expected_requests: usize) -> Self {
        self.equipment_endpoints
            .push((equipments, expected_requests));
        self
    }

    /// Add an endpoint answering with an HTTP error status.
    ///
    /// # Arguments
    /// - `path` - Request path, e.g. [`crate::constant::SHIP_DATA_PATH`]
    /// - `status` - HTTP status code to return
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_error_endpoint(mut self, path: &str, status: usize, expected_requests: usize) -> Self {
        self.error_endpoints
            .push((path.to_string(), status, expected_requests));
        self
    }

    /// Add a custom mock endpoint.
    ///
    /// The closure receives the mock server and returns the created mock. Custom endpoints
    /// are created before the shortcut endpoints.
    pub fn with_mock_endpoint<F>(mut self, builder: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(builder));
        self
    }

    /// Build the test context.
    ///
    /// Writes the queued local files, then creates the mock endpoints.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready test context
    /// - `Err(TestError)` - A local file could not be written
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Local files
        for (name, content) in &self.local_files {
            setup.data().write_local_file(name, content)?;
        }

        for record in &self.local_versions {
            setup.data().write_local_version(record)?;
        }

        // 2. Mock endpoints
        // Note: Custom endpoints are created first to allow sequential mockito matching
        // when a test registers several mocks for the same path (e.g., error then success)
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (path, status, expected) in self.error_endpoints {
            mocks.push(setup.data().create_error_endpoint(&path, status, expected));
        }

        for (record, expected) in self.version_endpoints {
            mocks.push(setup.data().create_version_endpoint(&record, expected));
        }

        for (ships, expected) in self.ship_endpoints {
            mocks.push(setup.data().create_ship_endpoint(&ships, expected));
        }

        for (equipments, expected) in self.equipment_endpoints {
            mocks.push(setup.data().create_equipment_endpoint(&equipments, expected));
        }

        setup.mocks = mocks;

        Ok(setup)
    }
}
