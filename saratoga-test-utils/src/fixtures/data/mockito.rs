//! Mock HTTP endpoint creation utilities.
//!
//! This module provides methods for creating mock endpoints that simulate the upstream
//! raw file host. Each endpoint verifies it was called the expected number of times once
//! asserted.

use mockito::Mock;
use serde_json::Value;

use crate::{
    constant::{EQUIPMENT_DATA_PATH, SHIP_DATA_PATH, VERSION_PATH},
    fixtures::data::DataFixtures,
};

impl<'a> DataFixtures<'a> {
    /// Create a mock endpoint serving `body` as JSON at `path`.
    ///
    /// # Arguments
    /// - `path` - Request path on the mock server
    /// - `body` - JSON value served as the response body
    /// - `expected_requests` - Number of times this endpoint should be called
    ///
    /// # Returns
    /// - `Mock` - The created mock endpoint
    pub fn create_json_endpoint(
        &mut self,
        path: &str,
        body: &Value,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for the remote version record.
    pub fn create_version_endpoint(&mut self, record: &Value, expected_requests: usize) -> Mock {
        self.create_json_endpoint(VERSION_PATH, record, expected_requests)
    }

    /// Create a mock endpoint for the remote ship dataset.
    pub fn create_ship_endpoint(&mut self, ships: &Value, expected_requests: usize) -> Mock {
        self.create_json_endpoint(SHIP_DATA_PATH, ships, expected_requests)
    }

    /// Create a mock endpoint for the remote equipment dataset.
    pub fn create_equipment_endpoint(
        &mut self,
        equipments: &Value,
        expected_requests: usize,
    ) -> Mock {
        self.create_json_endpoint(EQUIPMENT_DATA_PATH, equipments, expected_requests)
    }

    /// Create a mock endpoint answering `path` with an error status and no body.
    ///
    /// # Arguments
    /// - `path` - Request path on the mock server
    /// - `status` - HTTP status code to return (e.g. 500, 503)
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_error_endpoint(
        &mut self,
        path: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", path)
            .with_status(status)
            .expect(expected_requests)
            .create()
    }
}
