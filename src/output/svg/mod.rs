//! SVG bar-chart generation for the language breakdown.
//!
//! Self-contained fixed-width charts: one light and one dark variant per run,
//! differing only in palette. All text content is entity-escaped so language
//! names cannot corrupt the markup.

mod chart;
mod format;
mod theme;

pub use chart::LanguageChart;
pub use theme::Theme;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
