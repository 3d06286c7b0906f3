//! Aggregation of language edges into per-language byte totals.

use indexmap::IndexMap;

use crate::config::Filters;
use crate::github::Repository;

/// Cumulative byte size per language across all included repositories.
///
/// Keyed in first-encounter order, which downstream ranking uses as the
/// tie-break for equal sizes. Every stored total is strictly positive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageTotals {
    totals: IndexMap<String, u64>,
}

impl LanguageTotals {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    /// Grand total across all languages, displayed or not.
    #[must_use]
    pub fn total_bytes(&self) -> u64 {
        self.totals.values().sum()
    }

    /// A language's share of the grand total as a fraction in `[0, 1]`.
    /// A zero grand total yields `0.0` for every language.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn share(&self, size: u64) -> f64 {
        let total = self.total_bytes();
        if total == 0 {
            0.0
        } else {
            size as f64 / total as f64
        }
    }

    /// Entries sorted by size descending. The sort is stable, so equal sizes
    /// keep their first-encounter order.
    #[must_use]
    pub fn ranking(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .totals
            .iter()
            .map(|(name, size)| (name.as_str(), *size))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

impl FromIterator<(String, u64)> for LanguageTotals {
    /// Collect pre-summed totals, preserving encounter order. Zero-size
    /// entries are dropped.
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut totals: IndexMap<String, u64> = IndexMap::new();
        for (name, size) in iter {
            if size == 0 {
                continue;
            }
            *totals.entry(name).or_insert(0) += size;
        }
        Self { totals }
    }
}

/// Fold repository language edges into per-language totals.
///
/// Skips archived repositories, nameless repositories, and repositories in
/// `filters.repos`; within kept repositories, skips edges whose language is
/// in `filters.languages` or whose size is zero. Totals are commutative over
/// input order.
#[must_use]
pub fn aggregate(repositories: &[Repository], filters: &Filters) -> LanguageTotals {
    let mut totals: IndexMap<String, u64> = IndexMap::new();

    for repo in repositories {
        let Some(ref name) = repo.name else {
            continue;
        };
        if repo.is_archived || filters.repos.contains(name) {
            continue;
        }

        for edge in &repo.languages {
            if edge.size == 0 || filters.languages.contains(&edge.name) {
                continue;
            }
            *totals.entry(edge.name.clone()).or_insert(0) += edge.size;
        }
    }

    LanguageTotals { totals }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
