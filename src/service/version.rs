//! Version metadata comparison and persistence.
//!
//! The version record is a JSON object with one entry per dataset kind. Entries are opaque:
//! a dataset needs updating when the remote entry differs from the local one.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dioxus_logger::tracing::debug;
use serde_json::{Map, Value};

use crate::{
    data::local::PreparedDataDir,
    error::{version::VersionError, Error},
    model::dataset::DatasetKind,
    util::time::timestamp_from_millis,
};

/// Key of the upstream refresh date inside a version entry, in epoch milliseconds.
pub const REFRESH_DATE_KEY: &str = "last-data-refresh-date";

/// Decides per dataset kind whether the local copy is behind the remote source.
#[async_trait]
pub trait VersionComparator: Send {
    /// Fetches remote version metadata and loads the local version record.
    ///
    /// `include_data` controls whether the remote record is retained so that
    /// [`VersionComparator::update_version_file`] can persist it afterwards.
    async fn fetch(&mut self, include_data: bool) -> Result<(), Error>;

    /// True when the remote entry for `kind` differs from the local one.
    fn needs_update(&self, kind: DatasetKind) -> bool;

    /// True when the local record holds no entry for any dataset kind (first run).
    fn no_local_data(&self) -> bool;

    /// Persists the fetched remote version record.
    ///
    /// - `None` - write the whole remote record
    /// - `Some(kind)` - record only `kind`'s remote entry, keeping the other local entries
    async fn update_version_file(&mut self, scope: Option<DatasetKind>) -> Result<(), Error>;

    /// When the remote data for `kind` was last refreshed upstream, if known.
    fn refreshed_at(&self, _kind: DatasetKind) -> Option<DateTime<Utc>> {
        None
    }
}

/// [`VersionComparator`] backed by a remote version link and the local version file.
pub struct VersionValidator {
    client: reqwest::Client,
    version_url: String,
    version_file: PathBuf,
    remote: Option<Value>,
    local: Option<Value>,
    retained: bool,
}

impl VersionValidator {
    /// Creates a new instance of [`VersionValidator`]
    ///
    /// # Arguments
    /// - `client` - HTTP client used for the version metadata request
    /// - `version_url` - Link of the remote version record
    /// - `data_dir` - Prepared data directory holding the local version file
    pub fn new(
        client: reqwest::Client,
        version_url: impl Into<String>,
        data_dir: &PreparedDataDir,
    ) -> Self {
        Self {
            client,
            version_url: version_url.into(),
            version_file: data_dir.paths().version_file(),
            remote: None,
            local: None,
            retained: false,
        }
    }

    fn entry<'a>(record: &'a Option<Value>, kind: DatasetKind) -> Option<&'a Value> {
        record.as_ref().and_then(|r| r.get(kind.as_str()))
    }
}

#[async_trait]
impl VersionComparator for VersionValidator {
    /// # Returns
    /// - `Ok(())` - Remote and local records loaded
    /// - `Err(Error::Http)` - Remote metadata request failed
    /// - `Err(Error::Io)` / `Err(Error::Json)` - Local version file unreadable or malformed
    async fn fetch(&mut self, include_data: bool) -> Result<(), Error> {
        let remote: Value = self
            .client
            .get(&self.version_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let content = tokio::fs::read_to_string(&self.version_file).await?;
        let local: Value = serde_json::from_str(&content)?;

        debug!(
            "Fetched version metadata from {} (retained: {})",
            self.version_url, include_data
        );

        self.remote = Some(remote);
        self.local = Some(local);
        self.retained = include_data;

        Ok(())
    }

    /// Fails closed: before any fetch every dataset is reported as needing an update.
    fn needs_update(&self, kind: DatasetKind) -> bool {
        if self.remote.is_none() || self.local.is_none() {
            return true;
        }

        let needs_update = Self::entry(&self.remote, kind) != Self::entry(&self.local, kind);
        debug!("Dataset {} needs update: {}", kind, needs_update);

        needs_update
    }

    fn no_local_data(&self) -> bool {
        DatasetKind::ALL
            .iter()
            .all(|kind| Self::entry(&self.local, *kind).is_none())
    }

    async fn update_version_file(&mut self, scope: Option<DatasetKind>) -> Result<(), Error> {
        let Some(remote) = self.remote.as_ref() else {
            return Err(VersionError::NotFetched.into());
        };
        if !self.retained {
            return Err(VersionError::RecordNotRetained.into());
        }

        let record = match scope {
            None => remote.clone(),
            Some(kind) => {
                let mut merged = match &self.local {
                    Some(Value::Object(map)) => map.clone(),
                    _ => Map::new(),
                };
                if let Some(entry) = remote.get(kind.as_str()) {
                    merged.insert(kind.as_str().to_string(), entry.clone());
                }
                Value::Object(merged)
            }
        };

        tokio::fs::write(&self.version_file, serde_json::to_string_pretty(&record)?).await?;
        debug!("Wrote version record to {}", self.version_file.display());

        self.local = Some(record);

        Ok(())
    }

    fn refreshed_at(&self, kind: DatasetKind) -> Option<DateTime<Utc>> {
        Self::entry(&self.remote, kind)
            .and_then(|entry| entry.get(REFRESH_DATE_KEY))
            .and_then(timestamp_from_millis)
    }
}
