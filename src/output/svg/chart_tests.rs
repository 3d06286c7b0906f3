//! Tests for the language bar chart.

use crate::stats::LanguageTotals;

use super::*;

fn totals(entries: &[(&str, u64)]) -> LanguageTotals {
    entries
        .iter()
        .map(|(name, size)| ((*name).to_string(), *size))
        .collect()
}

#[test]
fn canvas_height_grows_with_row_count() {
    let svg = LanguageChart::new(10).render(&totals(&[("A", 3), ("B", 2), ("C", 1)]), Theme::LIGHT);

    // 46 header + 3 rows x 26 + 18 bottom margin
    assert!(svg.contains(r#"width="740" height="142""#));
    assert!(svg.contains(r#"viewBox="0 0 740 142""#));
}

#[test]
fn header_shows_title_and_subtitle() {
    let svg = LanguageChart::new(10).render(&totals(&[("Rust", 1)]), Theme::LIGHT);

    assert!(svg.contains("Languages used across repositories"));
    assert!(svg.contains("GitHub Linguist byte counts"));
}

#[test]
fn rows_show_name_share_and_two_layer_bar() {
    let svg = LanguageChart::new(10).render(&totals(&[("Rust", 1), ("Go", 1)]), Theme::LIGHT);

    assert!(svg.contains(">Rust</text>"));
    assert!(svg.contains(">Go</text>"));
    assert!(svg.contains(">50.0%</text>"));
    // Track at full width, fill at half of the 482px track.
    assert!(svg.contains(r#"width="482""#));
    assert!(svg.contains(r#"width="241.00""#));
}

#[test]
fn single_language_fills_the_whole_track() {
    let svg = LanguageChart::new(10).render(&totals(&[("Rust", 123)]), Theme::LIGHT);

    assert!(svg.contains(r#"width="482.00""#));
    assert!(svg.contains(">100.0%</text>"));
}

#[test]
fn truncates_to_max_rows() {
    let svg = LanguageChart::new(2).render(&totals(&[("A", 3), ("B", 2), ("C", 1)]), Theme::LIGHT);

    assert!(svg.contains(">A</text>"));
    assert!(svg.contains(">B</text>"));
    assert!(!svg.contains(">C</text>"));
    // Height only accounts for the displayed rows.
    assert!(svg.contains(r#"height="116""#));
}

#[test]
fn language_names_are_escaped() {
    let svg = LanguageChart::new(10).render(&totals(&[("F<&>\"#", 1)]), Theme::LIGHT);

    assert!(svg.contains("F&lt;&amp;&gt;&quot;#"));
    assert!(!svg.contains("F<&>"));
}

#[test]
fn empty_aggregate_renders_header_only() {
    let svg = LanguageChart::new(10).render(&totals(&[]), Theme::DARK);

    // 46 + 18, no data rows, only the background rect.
    assert!(svg.contains(r#"height="64""#));
    assert!(svg.contains("Languages used across repositories"));
    assert_eq!(svg.matches("<rect").count(), 1);
}

#[test]
fn palette_is_the_only_difference_between_themes() {
    let data = totals(&[("Rust", 2), ("Go", 1)]);
    let light = LanguageChart::new(10).render(&data, Theme::LIGHT);
    let dark = LanguageChart::new(10).render(&data, Theme::DARK);

    assert!(light.contains("#ffffff"));
    assert!(dark.contains("#0d1117"));

    let normalized = dark
        .replace(Theme::DARK.bg, Theme::LIGHT.bg)
        .replace(Theme::DARK.fg, Theme::LIGHT.fg)
        .replace(Theme::DARK.muted, Theme::LIGHT.muted)
        .replace(Theme::DARK.track, Theme::LIGHT.track)
        .replace(Theme::DARK.fill, Theme::LIGHT.fill);
    assert_eq!(normalized, light);
}
