//! Plain-text rendering of page summaries.
//!
//! Mirrors the three footer rows of a paper logbook page: this page, brought
//! forward, and running total.

use crate::algorithms::summary::{PageSummaries, PageTotals};
use crate::time::sec_to_hm;

const LABEL_WIDTH: usize = 12;

/// Footer row label for the page's own flights
pub const CURRENT_LABEL: &str = "Diese Seite";
/// Footer row label for the carry-forward
pub const PREVIOUS_LABEL: &str = "Übertrag";
/// Footer row label for the running total
pub const TOTAL_LABEL: &str = "Gesamt";

/// Column header line matching [`format_totals_row`].
pub fn header_row() -> String {
    format!(
        "{:<width$} {:>8} {:>8} {:>8} {:>6} {:>6} {:>8}",
        "",
        "Block",
        "PIC",
        "Dual",
        "Ldg T",
        "Ldg N",
        "Nacht",
        width = LABEL_WIDTH
    )
}

/// Format one footer row.
///
/// # Example
/// ```
/// use flugbuch_rust::algorithms::PageTotals;
/// use flugbuch_rust::report::format_totals_row;
///
/// let totals = PageTotals {
///     total_seconds: 3720,
///     dual_seconds: 3720,
///     night_landings: 1,
///     night_seconds: 3720,
///     ..Default::default()
/// };
/// let row = format_totals_row("Diese Seite", &totals);
/// assert!(row.starts_with("Diese Seite"));
/// assert!(row.contains("1:02"));
/// ```
pub fn format_totals_row(label: &str, totals: &PageTotals) -> String {
    format!(
        "{:<width$} {:>8} {:>8} {:>8} {:>6} {:>6} {:>8}",
        label,
        sec_to_hm(totals.total_seconds),
        sec_to_hm(totals.pic_seconds),
        sec_to_hm(totals.dual_seconds),
        totals.day_landings,
        totals.night_landings,
        sec_to_hm(totals.night_seconds),
        width = LABEL_WIDTH
    )
}

/// Render every page summary as a text table, one block per page.
pub fn render_page_summaries(summaries: &PageSummaries) -> String {
    summaries
        .iter()
        .map(|(page, summary)| {
            let rows = [
                format!("Seite {}", page),
                header_row(),
                format_totals_row(CURRENT_LABEL, &summary.current),
                format_totals_row(PREVIOUS_LABEL, &summary.previous),
                format_totals_row(TOTAL_LABEL, &summary.total),
            ];
            rows.join("\n") + "\n\n"
        })
        .collect()
}
