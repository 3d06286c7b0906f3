//! Tests for the markdown table renderer.

use crate::stats::LanguageTotals;

use super::*;

fn totals(entries: &[(&str, u64)]) -> LanguageTotals {
    entries
        .iter()
        .map(|(name, size)| ((*name).to_string(), *size))
        .collect()
}

#[test]
fn renders_rows_in_descending_order_with_bars() {
    let table = LanguageTable::new(10).render(&totals(&[("A", 60), ("B", 30), ("C", 10)]));

    let expected = "### 📊 Language usage\n\
        \n\
        | Language | Share | Usage |\n\
        |---|---:|:---|\n\
        | A | 60.0% | `███████████       ` |\n\
        | B | 30.0% | `█████             ` |\n\
        | C | 10.0% | `██                ` |";
    assert_eq!(table, expected);
}

#[test]
fn truncates_to_max_rows_but_keeps_full_denominator() {
    let table = LanguageTable::new(2).render(&totals(&[("A", 50), ("B", 30), ("C", 20)]));

    // C is hidden yet still counts toward the total, so A is 50%, not 62.5%.
    assert!(table.contains("| A | 50.0% |"));
    assert!(table.contains("| B | 30.0% |"));
    assert!(!table.contains("| C |"));
    assert_eq!(table.lines().count(), 6);
}

#[test]
fn empty_aggregate_renders_header_only() {
    let table = LanguageTable::new(10).render(&totals(&[]));

    let expected = "### 📊 Language usage\n\
        \n\
        | Language | Share | Usage |\n\
        |---|---:|:---|";
    assert_eq!(table, expected);
}

#[test]
fn full_share_fills_the_whole_bar() {
    let table = LanguageTable::new(10).render(&totals(&[("Rust", 1)]));

    assert!(table.contains(&format!("`{}`", "█".repeat(BAR_WIDTH))));
    assert!(table.contains("100.0%"));
}

#[test]
fn bar_fill_rounds_to_nearest_cell() {
    // 25% of 18 cells is 4.5, which rounds to 5 (round half away from zero).
    let table = LanguageTable::new(10).render(&totals(&[("A", 25), ("B", 75)]));

    assert!(table.contains(&format!("| A | 25.0% | `{}{}` |", "█".repeat(5), " ".repeat(13))));
}
