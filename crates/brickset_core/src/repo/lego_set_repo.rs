//! LEGO set repository backed by the bundled catalogue.

use crate::model::lego_set::LegoSet;
use crate::repo::record_store::{RecordStore, Repository, StoreResult};
use crate::resource::BRICKSET_RESOURCE;
use std::path::Path;

/// Read-only repository of `LegoSet` records.
#[derive(Debug, Clone)]
pub struct LegoSetRepository {
    store: RecordStore<LegoSet>,
}

impl LegoSetRepository {
    /// Loads the catalogue bundled as `brickset.json`.
    pub fn open_bundled() -> StoreResult<Self> {
        RecordStore::from_bundled(BRICKSET_RESOURCE).map(Self::from)
    }

    /// Loads a catalogue from a JSON file with the same shape as the bundle.
    pub fn open_path(path: impl AsRef<Path>) -> StoreResult<Self> {
        RecordStore::from_path(path).map(Self::from)
    }

    pub fn from_json_str(resource: impl Into<String>, json: &str) -> StoreResult<Self> {
        RecordStore::from_json_str(resource, json).map(Self::from)
    }

    pub fn store(&self) -> &RecordStore<LegoSet> {
        &self.store
    }
}

impl From<RecordStore<LegoSet>> for LegoSetRepository {
    fn from(store: RecordStore<LegoSet>) -> Self {
        Self { store }
    }
}

impl Repository<LegoSet> for LegoSetRepository {
    fn get_all(&self) -> &[LegoSet] {
        self.store.all()
    }
}
