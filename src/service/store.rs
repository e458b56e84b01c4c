//! Dataset storage and the in-memory record cache.

use async_trait::async_trait;
use dioxus_logger::tracing::debug;
use serde_json::Value;

use crate::{
    data::{local::PreparedDataDir, paths::DataPaths},
    error::Error,
    model::dataset::DatasetKind,
    util::records::records_from_value,
};

/// Persists raw datasets and holds the cache loaded from them.
///
/// The sync orchestrator only hands over raw remote text (for storage) and parsed local
/// JSON (for caching); how either is interpreted is up to the store.
#[async_trait]
pub trait CacheStore: Send {
    /// Drops whatever the store holds for ships before a new ship dataset is stored.
    async fn clear_ships_data(&mut self) -> Result<(), Error>;

    /// Stores the raw remote ship dataset.
    async fn update_ships_data(&mut self, raw: String) -> Result<(), Error>;

    /// Drops whatever the store holds for equipments before a new equipment dataset is stored.
    async fn clear_equipments_data(&mut self) -> Result<(), Error>;

    /// Stores the raw remote equipment dataset.
    async fn update_equipments_data(&mut self, raw: String) -> Result<(), Error>;

    /// Replaces the ship cache from the parsed local ship file.
    fn load_ships_cache(&mut self, records: Value);

    /// Replaces the equipment cache from the parsed local equipment file.
    fn load_equipments_cache(&mut self, records: Value);

    /// Number of ship records currently cached.
    fn ships_cache_len(&self) -> usize;

    /// Number of equipment records currently cached.
    fn equipments_cache_len(&self) -> usize;
}

/// [`CacheStore`] writing datasets into the prepared data directory.
///
/// Clearing a dataset only empties its cache; the file on disk keeps the last stored copy
/// until an update replaces it. Updates write the remote text verbatim to a sibling
/// temporary file and rename it over the dataset file, so a failed fetch or an interrupted
/// write never leaves a truncated dataset behind. Cached records are derived with
/// [`records_from_value`].
#[derive(Debug)]
pub struct DataStore {
    paths: DataPaths,
    ship_cache: Vec<Value>,
    equipment_cache: Vec<Value>,
}

impl DataStore {
    /// Creates a new instance of [`DataStore`] with empty caches
    pub fn new(data_dir: &PreparedDataDir) -> Self {
        Self {
            paths: data_dir.paths().clone(),
            ship_cache: Vec::new(),
            equipment_cache: Vec::new(),
        }
    }

    /// Cached ship records.
    pub fn ships(&self) -> &[Value] {
        &self.ship_cache
    }

    /// Cached equipment records.
    pub fn equipments(&self) -> &[Value] {
        &self.equipment_cache
    }

    /// Replaces the dataset file of `kind` with `content` through a temporary file.
    async fn replace(&self, kind: DatasetKind, content: &str) -> Result<(), Error> {
        let target = self.paths.data_file(kind);
        let staging = self.paths.staging_file(kind);

        tokio::fs::write(&staging, content).await?;
        if let Err(e) = tokio::fs::rename(&staging, &target).await {
            let _ = tokio::fs::remove_file(&staging).await;
            return Err(e.into());
        }

        debug!("Stored {} bytes of {} data in {}", content.len(), kind, target.display());

        Ok(())
    }
}

#[async_trait]
impl CacheStore for DataStore {
    async fn clear_ships_data(&mut self) -> Result<(), Error> {
        self.ship_cache.clear();

        Ok(())
    }

    async fn update_ships_data(&mut self, raw: String) -> Result<(), Error> {
        self.replace(DatasetKind::Ships, &raw).await
    }

    async fn clear_equipments_data(&mut self) -> Result<(), Error> {
        self.equipment_cache.clear();

        Ok(())
    }

    async fn update_equipments_data(&mut self, raw: String) -> Result<(), Error> {
        self.replace(DatasetKind::Equipments, &raw).await
    }

    fn load_ships_cache(&mut self, records: Value) {
        self.ship_cache = records_from_value(records);
    }

    fn load_equipments_cache(&mut self, records: Value) {
        self.equipment_cache = records_from_value(records);
    }

    fn ships_cache_len(&self) -> usize {
        self.ship_cache.len()
    }

    fn equipments_cache_len(&self) -> usize {
        self.equipment_cache.len()
    }
}
