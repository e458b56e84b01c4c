//! Construction of the runtime components from a [`Config`].

use crate::{
    config::Config,
    data::{
        local::{initialize, PreparedDataDir},
        paths::DataPaths,
    },
    error::Error,
    service::{
        remote::HttpFetcher, store::DataStore, sync::DataSyncOrchestrator,
        version::VersionValidator,
    },
};

/// Orchestrator wired with the bundled HTTP, version file and data store implementations.
pub type Orchestrator = DataSyncOrchestrator<DataStore, VersionValidator, HttpFetcher>;

/// Build the HTTP client shared by the version and dataset requests
pub fn build_http_client(config: &Config) -> Result<reqwest::Client, Error> {
    let client = reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .build()?;

    Ok(client)
}

/// Create the data directory and its files if they are missing
pub fn prepare_data_dir(config: &Config) -> Result<PreparedDataDir, Error> {
    initialize(DataPaths::new(&config.data_dir))
}

/// Wire the orchestrator to the prepared data directory and the configured links
pub fn build_orchestrator(
    config: &Config,
    data_dir: PreparedDataDir,
    client: reqwest::Client,
) -> Orchestrator {
    let store = DataStore::new(&data_dir);
    let validator = VersionValidator::new(client.clone(), &config.links.version, &data_dir);
    let fetcher = HttpFetcher::new(client, config.links.clone());

    DataSyncOrchestrator::new(data_dir, store, validator, fetcher)
}
