//! LEGO set domain model.
//!
//! # Responsibility
//! - Define the catalogue record for one LEGO set.
//! - Provide presence-aware helpers used by query services.
//!
//! # Invariants
//! - Every field is optional, including nested dimension fields.
//! - Helpers never treat a missing value as a match.

use serde::Deserialize;

/// Catalogue entry for one LEGO set.
///
/// Source data is sparse: any field (and any nested dimension field) may be
/// missing or `null`, so all of them are modelled as `Option`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LegoSet {
    /// Set identifier, e.g. `10696-1`.
    pub number: Option<String>,
    pub name: Option<String>,
    /// Release year.
    pub year: Option<u32>,
    pub theme: Option<String>,
    pub subtheme: Option<String>,
    /// Piece count.
    pub pieces: Option<u32>,
    /// Packaging dimensions, when the catalogue knows them.
    pub dimensions: Option<Dimensions>,
}

/// Physical dimensions of a set box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl LegoSet {
    /// Returns whether a dimensions object is present, regardless of its content.
    pub fn has_dimensions(&self) -> bool {
        self.dimensions.is_some()
    }

    /// Returns the name length in Unicode scalar values, or `None` without a name.
    pub fn name_len(&self) -> Option<usize> {
        self.name.as_deref().map(|name| name.chars().count())
    }
}

impl Dimensions {
    /// Returns `length * width * height` when all three are known.
    pub fn volume(&self) -> Option<f64> {
        Some(self.length? * self.width? * self.height?)
    }
}
