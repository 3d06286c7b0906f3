//! Markdown table renderer for README injection.

use std::fmt::Write as FmtWrite;

use crate::stats::LanguageTotals;

use super::format_share;

/// Width of the text progress bar in character cells.
pub const BAR_WIDTH: usize = 18;

/// Renders the ranked languages as a markdown table fragment: a header line,
/// a column-header row, and one row per language among the top `max_rows`.
pub struct LanguageTable {
    max_rows: usize,
}

impl LanguageTable {
    #[must_use]
    pub const fn new(max_rows: usize) -> Self {
        Self { max_rows }
    }

    /// Render the table. Shares are computed against the grand total of all
    /// languages, including those truncated away. No trailing newline.
    #[must_use]
    pub fn render(&self, totals: &LanguageTotals) -> String {
        let mut output = String::new();

        output.push_str("### 📊 Language usage\n");
        output.push('\n');
        output.push_str("| Language | Share | Usage |\n");
        output.push_str("|---|---:|:---|");

        for (name, size) in totals.ranking().into_iter().take(self.max_rows) {
            let share = totals.share(size);
            let _ = write!(
                output,
                "\n| {name} | {} | `{}` |",
                format_share(share),
                progress_bar(share)
            );
        }

        output
    }
}

/// Fixed-width text progress bar: filled cell count is the share rounded to
/// the nearest cell.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn progress_bar(share: f64) -> String {
    let filled = ((share * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
    let mut bar = "█".repeat(filled);
    bar.push_str(&" ".repeat(BAR_WIDTH - filled));
    bar
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
