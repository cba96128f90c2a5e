//! Domain model for LEGO set catalogue records.
//!
//! # Responsibility
//! - Define the record shapes deserialized from catalogue resources.
//! - Keep every field optional so partial source entries still load.
//!
//! # Invariants
//! - Absent keys and explicit JSON `null` both map to `None`.
//! - Models carry no storage or output concerns.

pub mod lego_set;
