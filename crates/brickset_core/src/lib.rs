//! Core query layer over the bundled LEGO set catalogue.
//! Records load once into an immutable store; services answer queries on top.

pub mod logging;
pub mod model;
pub mod repo;
pub mod resource;
pub mod service;

pub use logging::{default_log_level, flush_logging, init_logging, logging_status};
pub use model::lego_set::{Dimensions, LegoSet};
pub use repo::lego_set_repo::LegoSetRepository;
pub use repo::record_store::{RecordStore, Repository, StoreError, StoreResult};
pub use resource::BRICKSET_RESOURCE;
pub use service::lego_set_service::{LegoSetService, MISSING_NAME};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
