//! Horizontal bar chart of language shares.

use std::fmt::Write;

use crate::stats::LanguageTotals;

use super::super::format_share;
use super::format::html_escape;
use super::theme::Theme;

const WIDTH: u32 = 740;
const LEFT_MARGIN: u32 = 18;
const HEADER_HEIGHT: u32 = 46;
const ROW_HEIGHT: u32 = 26;
const BOTTOM_MARGIN: u32 = 18;

const NAME_X: u32 = LEFT_MARGIN;
const PCT_X: u32 = 210;
const BAR_X: u32 = 240;
const BAR_WIDTH: u32 = WIDTH - BAR_X - 18;

const TITLE: &str = "Languages used across repositories";
const SUBTITLE: &str = "GitHub Linguist byte counts";

const FONT_FAMILY: &str = "ui-sans-serif, system-ui, -apple-system, Segoe UI, Roboto, Arial";

/// Fixed-width chart whose height grows linearly with the number of
/// displayed rows: title, subtitle, and one name/percentage/bar row per
/// language among the top `max_rows`.
#[derive(Debug)]
pub struct LanguageChart {
    max_rows: usize,
}

impl LanguageChart {
    #[must_use]
    pub const fn new(max_rows: usize) -> Self {
        Self { max_rows }
    }

    /// Render a self-contained SVG document in the given palette.
    ///
    /// An empty aggregate still renders the header area with zero data rows.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn render(&self, totals: &LanguageTotals, theme: Theme) -> String {
        let ranking = totals.ranking();
        let rows = ranking.len().min(self.max_rows);
        let height = HEADER_HEIGHT + rows as u32 * ROW_HEIGHT + BOTTOM_MARGIN;

        let mut output = String::new();

        let _ = writeln!(
            output,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{height}" viewBox="0 0 {WIDTH} {height}">"#
        );
        let _ = writeln!(
            output,
            r#"<rect x="0" y="0" width="{WIDTH}" height="{height}" rx="14" fill="{}"/>"#,
            theme.bg
        );
        let _ = writeln!(
            output,
            r#"<text x="{LEFT_MARGIN}" y="30" fill="{}" font-size="18" font-family="{FONT_FAMILY}">{}</text>"#,
            theme.fg,
            html_escape(TITLE)
        );
        let _ = writeln!(
            output,
            r#"<text x="{LEFT_MARGIN}" y="48" fill="{}" font-size="12" font-family="{FONT_FAMILY}">{}</text>"#,
            theme.muted,
            html_escape(SUBTITLE)
        );

        for (i, (name, size)) in ranking.into_iter().take(rows).enumerate() {
            let share = totals.share(size);
            let y = HEADER_HEIGHT + i as u32 * ROW_HEIGHT;

            let _ = writeln!(
                output,
                r#"<text x="{NAME_X}" y="{}" fill="{}" font-size="14" font-family="{FONT_FAMILY}">{}</text>"#,
                y + 17,
                theme.fg,
                html_escape(name)
            );
            let _ = writeln!(
                output,
                r#"<text x="{PCT_X}" y="{}" fill="{}" font-size="13" text-anchor="end" font-family="{FONT_FAMILY}">{}</text>"#,
                y + 17,
                theme.muted,
                html_escape(&format_share(share))
            );

            // Background track, then the filled portion on top.
            let _ = writeln!(
                output,
                r#"<rect x="{BAR_X}" y="{}" width="{BAR_WIDTH}" height="10" rx="5" fill="{}"/>"#,
                y + 8,
                theme.track
            );
            let fill_width = (share * f64::from(BAR_WIDTH)).max(0.0);
            let _ = writeln!(
                output,
                r#"<rect x="{BAR_X}" y="{}" width="{fill_width:.2}" height="10" rx="5" fill="{}"/>"#,
                y + 8,
                theme.fill
            );
        }

        output.push_str("</svg>");
        output
    }
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
