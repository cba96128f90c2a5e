//! LEGO set query service.
//!
//! # Responsibility
//! - Provide count/filter/limit queries over a LEGO set repository.
//! - Render name listings to any `io::Write` sink.
//!
//! # Invariants
//! - Substring matching is case-sensitive.
//! - A missing field never satisfies a predicate on that field.
//! - Listings preserve repository load order.

use crate::model::lego_set::LegoSet;
use crate::repo::record_store::Repository;
use std::io::{self, Write};

/// Rendered in place of a missing name in `first N` listings.
pub const MISSING_NAME: &str = "null";

/// Query service over any read-only LEGO set repository.
pub struct LegoSetService<R: Repository<LegoSet>> {
    repo: R,
}

impl<R: Repository<LegoSet>> LegoSetService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn total_count(&self) -> usize {
        self.repo.get_all().len()
    }

    /// Counts sets whose theme is present and contains `theme`.
    pub fn count_with_theme(&self, theme: &str) -> usize {
        self.repo
            .get_all()
            .iter()
            .filter(|set| set.theme.as_deref().is_some_and(|t| t.contains(theme)))
            .count()
    }

    /// Counts sets whose name is present and contains `fragment`.
    pub fn count_name_contains(&self, fragment: &str) -> usize {
        self.repo
            .get_all()
            .iter()
            .filter(|set| set.name.as_deref().is_some_and(|n| n.contains(fragment)))
            .count()
    }

    /// Returns names strictly longer than `n` characters, in load order.
    ///
    /// Sets without a name are skipped. A negative `n` selects every name.
    pub fn names_longer_than(&self, n: i64) -> Vec<&str> {
        self.repo
            .get_all()
            .iter()
            .filter(|set| {
                set.name_len()
                    .is_some_and(|len| i64::try_from(len).map_or(true, |len| len > n))
            })
            .filter_map(|set| set.name.as_deref())
            .collect()
    }

    /// Writes `names_longer_than(n)` to `out`, one name per line.
    pub fn print_names_longer_than(&self, n: i64, out: &mut impl Write) -> io::Result<()> {
        for name in self.names_longer_than(n) {
            writeln!(out, "{name}")?;
        }
        Ok(())
    }

    /// Counts sets that carry a dimensions object, whatever its content.
    pub fn count_with_dimensions(&self) -> usize {
        self.repo
            .get_all()
            .iter()
            .filter(|set| set.has_dimensions())
            .count()
    }

    /// Returns the names of the first `n` sets in load order.
    ///
    /// # Contract
    /// - Yields exactly `min(n, total_count())` entries; empty for `n <= 0`.
    /// - A set without a name keeps its slot as `None`.
    pub fn first_n_names(&self, n: i64) -> Vec<Option<&str>> {
        let limit = usize::try_from(n).unwrap_or(0);
        self.repo
            .get_all()
            .iter()
            .take(limit)
            .map(|set| set.name.as_deref())
            .collect()
    }

    /// Writes `first_n_names(n)` to `out`, one per line; missing names as `null`.
    pub fn print_first_n_names(&self, n: i64, out: &mut impl Write) -> io::Result<()> {
        for name in self.first_n_names(n) {
            writeln!(out, "{}", name.unwrap_or(MISSING_NAME))?;
        }
        Ok(())
    }

    /// Sums known piece counts; sets without a count contribute nothing.
    pub fn total_pieces(&self) -> u64 {
        self.repo
            .get_all()
            .iter()
            .filter_map(|set| set.pieces)
            .map(u64::from)
            .sum()
    }
}
