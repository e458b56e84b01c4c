//! Synchronization of the local data directory with the remote source.
//!
//! [`DataSyncOrchestrator`] runs a fixed sequence of steps: compare version metadata,
//! download the stale datasets into the store, persist the new version record, and reload
//! the cache from the local files. Each step is awaited before the next one starts and
//! datasets are always handled in [`DatasetKind::ALL`] order, ships first.

use dioxus_logger::tracing::{debug, info};
use serde_json::Value;

use crate::{
    data::local::PreparedDataDir,
    error::Error,
    model::{
        dataset::DatasetKind,
        sync::{CacheReport, UpdateAvailability},
    },
    service::{remote::RemoteFetcher, store::CacheStore, version::VersionComparator},
};

/// Keeps the local datasets and the store's cache in sync with the remote source.
///
/// Construction requires a [`PreparedDataDir`], so the data directory and its files are
/// guaranteed to exist before any operation runs. No error is caught or translated here:
/// filesystem, network and JSON failures reach the caller unchanged, with no retry.
pub struct DataSyncOrchestrator<S, V, F> {
    data_dir: PreparedDataDir,
    store: S,
    validator: V,
    fetcher: F,
}

impl<S, V, F> DataSyncOrchestrator<S, V, F>
where
    S: CacheStore,
    V: VersionComparator,
    F: RemoteFetcher,
{
    /// Creates a new instance of [`DataSyncOrchestrator`]
    ///
    /// # Arguments
    /// - `data_dir` - Initialized data directory the local datasets are read from
    /// - `store` - Store receiving remote datasets and holding the cache
    /// - `validator` - Version comparator deciding which datasets are stale
    /// - `fetcher` - Source of the raw remote datasets
    pub fn new(data_dir: PreparedDataDir, store: S, validator: V, fetcher: F) -> Self {
        Self {
            data_dir,
            store,
            validator,
            fetcher,
        }
    }

    /// The store holding the cache.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The data directory the local datasets are read from.
    pub fn data_dir(&self) -> &PreparedDataDir {
        &self.data_dir
    }

    /// Updates the local datasets, then reloads the cache from them.
    ///
    /// The cache refresh only starts once the local data phase has completed; if that phase
    /// fails its error is returned and the cache is left as it was.
    pub async fn update_data_and_cache(&mut self) -> Result<CacheReport, Error> {
        self.update_local_data().await?;
        self.update_cache().await
    }

    /// Reports which datasets have a newer remote version, without changing anything.
    ///
    /// Only the version metadata is fetched; no dataset is downloaded and neither the local
    /// files nor the cache are touched.
    ///
    /// # Returns
    /// - `Ok(UpdateAvailability)` - Per-dataset update flags
    /// - `Err(Error)` - Version metadata could not be fetched or the local record read
    pub async fn check_for_update(&mut self) -> Result<UpdateAvailability, Error> {
        self.validator.fetch(false).await?;

        Ok(UpdateAvailability {
            ship_update_available: self.validator.needs_update(DatasetKind::Ships),
            equipment_update_available: self.validator.needs_update(DatasetKind::Equipments),
        })
    }

    /// Downloads every stale dataset into the store and records the new versions.
    ///
    /// On first run (no local version entries) both datasets are downloaded, ships then
    /// equipments, and the whole remote version record is written once. Otherwise each
    /// stale dataset is downloaded and its own version entry written straight after, so a
    /// failure on equipments does not lose the version already recorded for ships.
    ///
    /// # Returns
    /// - `Ok(())` - Every stale dataset was stored and its version recorded
    /// - `Err(Error)` - The first failing step; later steps were not attempted
    pub async fn update_local_data(&mut self) -> Result<(), Error> {
        self.validator.fetch(true).await?;

        if self.validator.no_local_data() {
            debug!("No local version record, downloading every dataset");

            for kind in DatasetKind::ALL {
                self.update_stored(kind).await?;
            }
            self.validator.update_version_file(None).await?;

            return Ok(());
        }

        for kind in DatasetKind::ALL {
            if self.validator.needs_update(kind) {
                self.update_stored(kind).await?;
                self.validator.update_version_file(Some(kind)).await?;
            }
        }

        Ok(())
    }

    /// Reloads the store's cache from the local ship and equipment files.
    ///
    /// Never touches the network. Parsed values are handed to the store as-is, so a file
    /// holding `{}` or any other non-array JSON is accepted here.
    pub async fn update_cache(&mut self) -> Result<CacheReport, Error> {
        let ships = self.fetch_from_local(DatasetKind::Ships).await?;
        self.store.load_ships_cache(ships);

        let equipments = self.fetch_from_local(DatasetKind::Equipments).await?;
        self.store.load_equipments_cache(equipments);

        let paths = self.data_dir.paths();
        let report = CacheReport {
            ships_loaded: self.store.ships_cache_len(),
            ships_source: paths.ship_file(),
            equipments_loaded: self.store.equipments_cache_len(),
            equipments_source: paths.equipment_file(),
        };

        info!(
            "Loaded {} ships from {}.",
            report.ships_loaded,
            report.ships_source.display()
        );
        info!(
            "Loaded {} equipments from {}.",
            report.equipments_loaded,
            report.equipments_source.display()
        );

        Ok(report)
    }

    /// Clears the store's data for `kind`, then stores the freshly fetched remote text.
    async fn update_stored(&mut self, kind: DatasetKind) -> Result<(), Error> {
        match kind {
            DatasetKind::Ships => {
                self.store.clear_ships_data().await?;
                let raw = self.fetch_from_remote(kind).await?;
                self.store.update_ships_data(raw).await?;
            }
            DatasetKind::Equipments => {
                self.store.clear_equipments_data().await?;
                let raw = self.fetch_from_remote(kind).await?;
                self.store.update_equipments_data(raw).await?;
            }
        }

        match self.validator.refreshed_at(kind) {
            Some(refreshed_at) => info!(
                "Updated local {} data (refreshed upstream at {})",
                kind, refreshed_at
            ),
            None => info!("Updated local {} data", kind),
        }

        Ok(())
    }

    async fn fetch_from_remote(&self, kind: DatasetKind) -> Result<String, Error> {
        self.fetcher.fetch_text(kind).await
    }

    async fn fetch_from_local(&self, kind: DatasetKind) -> Result<Value, Error> {
        self.data_dir.read_json(kind).await
    }
}
