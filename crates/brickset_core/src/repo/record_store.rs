//! Generic load-once record store over JSON array resources.
//!
//! # Responsibility
//! - Deserialize a bundled or on-disk JSON array into typed records.
//! - Expose the loaded records as an immutable, ordered view.
//!
//! # Invariants
//! - Construction either yields a fully loaded store or an error; there is
//!   no partially loaded state.
//! - Elements are fixed after construction; no API hands out `&mut T`.
//! - Element order matches the order of entries in the source array.

use crate::resource;
use log::{error, info};
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::Path;
use std::time::Instant;

pub type StoreResult<T> = Result<T, StoreError>;

/// Load failure for a record store. Every variant is fatal to construction.
#[derive(Debug)]
pub enum StoreError {
    /// The named resource is not bundled, or the file does not exist.
    ResourceNotFound { resource: String },
    /// The file exists but could not be read.
    Io {
        resource: String,
        source: io::Error,
    },
    /// Content is not valid JSON or does not match the record shape.
    Parse {
        resource: String,
        source: serde_json::Error,
    },
}

impl StoreError {
    /// Returns the resource label the failure refers to.
    pub fn resource(&self) -> &str {
        match self {
            Self::ResourceNotFound { resource }
            | Self::Io { resource, .. }
            | Self::Parse { resource, .. } => resource.as_str(),
        }
    }

    fn code(&self) -> &'static str {
        match self {
            Self::ResourceNotFound { .. } => "resource_not_found",
            Self::Io { .. } => "resource_read_failed",
            Self::Parse { .. } => "parse_failed",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ResourceNotFound { resource } => write!(f, "resource not found: {resource}"),
            Self::Io { resource, source } => {
                write!(f, "failed to read resource `{resource}`: {source}")
            }
            Self::Parse { resource, source } => {
                write!(f, "failed to parse resource `{resource}`: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ResourceNotFound { .. } => None,
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
        }
    }
}

/// Read-only access to a collection of records.
pub trait Repository<T> {
    /// Returns every record in load order.
    fn get_all(&self) -> &[T];
}

/// Immutable, ordered collection of records loaded from one JSON resource.
#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    resource: String,
    elements: Vec<T>,
}

impl<T: DeserializeOwned> RecordStore<T> {
    /// Loads records from a resource bundled into the crate.
    ///
    /// # Errors
    /// - `ResourceNotFound` when `name` is not a bundled resource.
    /// - `Parse` when the bundled content does not deserialize into `Vec<T>`.
    pub fn from_bundled(name: &str) -> StoreResult<Self> {
        let started_at = Instant::now();
        info!("event=store_load module=repo status=start source=bundle resource={name}");

        let Some(content) = resource::bundled(name) else {
            let err = StoreError::ResourceNotFound {
                resource: name.to_string(),
            };
            log_load_error(&err, started_at);
            return Err(err);
        };

        Self::parse_logged(name.to_string(), content, started_at)
    }

    /// Loads records from a JSON file on disk.
    ///
    /// # Errors
    /// - `ResourceNotFound` when the file does not exist.
    /// - `Io` for any other read failure.
    /// - `Parse` when the file content does not deserialize into `Vec<T>`.
    pub fn from_path(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let label = path.display().to_string();
        let started_at = Instant::now();
        info!("event=store_load module=repo status=start source=file resource={label}");

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                let err = if err.kind() == io::ErrorKind::NotFound {
                    StoreError::ResourceNotFound { resource: label }
                } else {
                    StoreError::Io {
                        resource: label,
                        source: err,
                    }
                };
                log_load_error(&err, started_at);
                return Err(err);
            }
        };

        Self::parse_logged(label, &content, started_at)
    }

    /// Parses an in-memory JSON array document labelled as `resource`.
    pub fn from_json_str(resource: impl Into<String>, json: &str) -> StoreResult<Self> {
        let resource = resource.into();
        let elements =
            serde_json::from_str::<Vec<T>>(json).map_err(|source| StoreError::Parse {
                resource: resource.clone(),
                source,
            })?;
        Ok(Self { resource, elements })
    }

    fn parse_logged(resource: String, json: &str, started_at: Instant) -> StoreResult<Self> {
        match Self::from_json_str(resource, json) {
            Ok(store) => {
                info!(
                    "event=store_load module=repo status=ok resource={} records={} duration_ms={}",
                    store.resource,
                    store.elements.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(store)
            }
            Err(err) => {
                log_load_error(&err, started_at);
                Err(err)
            }
        }
    }
}

impl<T> RecordStore<T> {
    /// Returns all records in load order.
    pub fn all(&self) -> &[T] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the label (bundle name or file path) the store was loaded from.
    pub fn resource(&self) -> &str {
        &self.resource
    }
}

impl<T> Repository<T> for RecordStore<T> {
    fn get_all(&self) -> &[T] {
        self.all()
    }
}

impl<'a, T> IntoIterator for &'a RecordStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn log_load_error(err: &StoreError, started_at: Instant) {
    error!(
        "event=store_load module=repo status=error resource={} duration_ms={} error_code={} error={}",
        err.resource(),
        started_at.elapsed().as_millis(),
        err.code(),
        err
    );
}

#[cfg(test)]
mod tests {
    use super::{RecordStore, Repository, StoreError};
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Point {
        x: i32,
        y: Option<i32>,
    }

    #[test]
    fn parses_array_in_source_order() {
        let store =
            RecordStore::<Point>::from_json_str("points", r#"[{"x":2},{"x":1,"y":5}]"#).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.resource(), "points");
        assert_eq!(store.all()[0], Point { x: 2, y: None });
        assert_eq!(store.get_all()[1], Point { x: 1, y: Some(5) });
    }

    #[test]
    fn non_array_document_is_parse_error() {
        let err = RecordStore::<Point>::from_json_str("points", r#"{"x":1}"#).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test]
    fn shape_mismatch_is_parse_error() {
        let err = RecordStore::<Point>::from_json_str("points", r#"[{"x":"one"}]"#).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
        assert_eq!(err.resource(), "points");
    }

    #[test]
    fn empty_array_loads_empty_store() {
        let store = RecordStore::<Point>::from_json_str("points", "[]").unwrap();
        assert!(store.is_empty());
        assert_eq!(store.iter().count(), 0);
    }
}
