//! Core use-case services.
//!
//! # Responsibility
//! - Compose repository reads into query-level APIs.
//! - Keep output rendering behind `io::Write` so callers choose the sink.

pub mod lego_set_service;
