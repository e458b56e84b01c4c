use std::{
    io,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::{
    data::{local::initialize, paths::DataPaths},
    error::Error,
    model::dataset::DatasetKind,
    service::{
        remote::RemoteFetcher, store::CacheStore, sync::DataSyncOrchestrator,
        version::VersionComparator,
    },
    util::records::records_from_value,
};


/// A collaborator call observed by the stubs, in the order it happened.
#[derive(Debug, Clone, PartialEq)]
enum Call {
    VersionFetch { include_data: bool },
    VersionPersist(Option<DatasetKind>),
    RemoteFetch(DatasetKind),
    Clear(DatasetKind),
    Update(DatasetKind, String),
    LoadCache(DatasetKind, Value),
}

#[derive(Clone, Default)]
struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    fn push(&self, call: Call) {
        self.0.lock().unwrap().push(call);
    }

    fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }

    fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|call| predicate(call)).count()
    }

    fn persists(&self) -> usize {
        self.count(|call| matches!(call, Call::VersionPersist(_)))
    }

    fn touched(&self, kind: DatasetKind) -> bool {
        self.count(|call| match call {
            Call::RemoteFetch(k) | Call::Clear(k) | Call::Update(k, _) => *k == kind,
            _ => false,
        }) > 0
    }
}

fn network_error(kind: DatasetKind) -> Error {
    Error::Io(io::Error::new(
        io::ErrorKind::ConnectionRefused,
        format!("{} endpoint unreachable", kind),
    ))
}

struct StubComparator {
    log: CallLog,
    no_local_data: bool,
    stale: Vec<DatasetKind>,
    fail_fetch: bool,
}

impl StubComparator {
    fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            no_local_data: false,
            stale: Vec::new(),
            fail_fetch: false,
        }
    }

    fn first_run(mut self) -> Self {
        self.no_local_data = true;
        self.stale = DatasetKind::ALL.to_vec();
        self
    }

    fn stale(mut self, kind: DatasetKind) -> Self {
        self.stale.push(kind);
        self
    }

    fn failing_fetch(mut self) -> Self {
        self.fail_fetch = true;
        self
    }
}

#[async_trait]
impl VersionComparator for StubComparator {
    async fn fetch(&mut self, include_data: bool) -> Result<(), Error> {
        self.log.push(Call::VersionFetch { include_data });
        if self.fail_fetch {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "version endpoint unreachable",
            )));
        }
        Ok(())
    }

    fn needs_update(&self, kind: DatasetKind) -> bool {
        self.stale.contains(&kind)
    }

    fn no_local_data(&self) -> bool {
        self.no_local_data
    }

    async fn update_version_file(&mut self, scope: Option<DatasetKind>) -> Result<(), Error> {
        self.log.push(Call::VersionPersist(scope));
        Ok(())
    }
}

struct StubFetcher {
    log: CallLog,
    failing: Vec<DatasetKind>,
}

impl StubFetcher {
    fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            failing: Vec::new(),
        }
    }

    fn failing(mut self, kind: DatasetKind) -> Self {
        self.failing.push(kind);
        self
    }
}

#[async_trait]
impl RemoteFetcher for StubFetcher {
    async fn fetch_text(&self, kind: DatasetKind) -> Result<String, Error> {
        self.log.push(Call::RemoteFetch(kind));
        if self.failing.contains(&kind) {
            return Err(network_error(kind));
        }
        Ok(format!("[\"remote {}\"]", kind))
    }
}

struct RecordingStore {
    log: CallLog,
    ships: usize,
    equipments: usize,
}

impl RecordingStore {
    fn new(log: &CallLog) -> Self {
        Self {
            log: log.clone(),
            ships: 0,
            equipments: 0,
        }
    }
}

#[async_trait]
impl CacheStore for RecordingStore {
    async fn clear_ships_data(&mut self) -> Result<(), Error> {
        self.log.push(Call::Clear(DatasetKind::Ships));
        Ok(())
    }

    async fn update_ships_data(&mut self, raw: String) -> Result<(), Error> {
        self.log.push(Call::Update(DatasetKind::Ships, raw));
        Ok(())
    }

    async fn clear_equipments_data(&mut self) -> Result<(), Error> {
        self.log.push(Call::Clear(DatasetKind::Equipments));
        Ok(())
    }

    async fn update_equipments_data(&mut self, raw: String) -> Result<(), Error> {
        self.log.push(Call::Update(DatasetKind::Equipments, raw));
        Ok(())
    }

    fn load_ships_cache(&mut self, records: Value) {
        self.ships = records_from_value(records.clone()).len();
        self.log.push(Call::LoadCache(DatasetKind::Ships, records));
    }

    fn load_equipments_cache(&mut self, records: Value) {
        self.equipments = records_from_value(records.clone()).len();
        self.log.push(Call::LoadCache(DatasetKind::Equipments, records));
    }

    fn ships_cache_len(&self) -> usize {
        self.ships
    }

    fn equipments_cache_len(&self) -> usize {
        self.equipments
    }
}

type StubOrchestrator = DataSyncOrchestrator<RecordingStore, StubComparator, StubFetcher>;

/// Orchestrator over an initialized temporary data directory and the given stubs.
fn orchestrator(
    log: &CallLog,
    comparator: StubComparator,
    fetcher: StubFetcher,
) -> (TempDir, StubOrchestrator) {
    let tmp = TempDir::new().expect("create temp dir");
    let data_dir = initialize(DataPaths::new(tmp.path().join("data"))).expect("initialize");

    let orchestrator =
        DataSyncOrchestrator::new(data_dir, RecordingStore::new(log), comparator, fetcher);

    (tmp, orchestrator)
}
