//! Renderers for the aggregated language totals.

pub mod markdown;
pub mod svg;

pub use markdown::LanguageTable;
pub use svg::{LanguageChart, Theme};

/// Format a share fraction as a percentage with one decimal place.
#[must_use]
pub fn format_share(share: f64) -> String {
    format!("{:.1}%", share * 100.0)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
