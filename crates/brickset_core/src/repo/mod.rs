//! Repository layer over bundled and on-disk record resources.
//!
//! # Responsibility
//! - Load typed records once and expose them read-only.
//! - Report load failures as semantic errors (`ResourceNotFound`, `Parse`).
//!
//! # Invariants
//! - Repositories never mutate records after construction.
//! - Callers compose filters over `Repository::get_all`; repositories define
//!   no ad hoc query methods.

pub mod lego_set_repo;
pub mod record_store;
