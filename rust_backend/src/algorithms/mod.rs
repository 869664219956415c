//! Logbook algorithms.
//!
//! # Components
//!
//! - [`merge`]: Carry user assignments across spreadsheet re-imports
//! - [`summary`]: Per-page totals with cumulative carry-forward
//!
//! # Example
//!
//! ```
//! use flugbuch_rust::algorithms::{compute_page_summaries, merge_assignments};
//! use flugbuch_rust::core::domain::FlightRecord;
//!
//! let previous: Vec<FlightRecord> = Vec::new();
//! let imported: Vec<FlightRecord> = Vec::new();
//!
//! let flights = merge_assignments(&previous, imported);
//! let summaries = compute_page_summaries(&flights);
//! assert!(summaries.is_empty());
//! ```

pub mod merge;
pub mod summary;

pub use merge::{merge_assignments, merge_assignments_with_stats, MergeStats};
pub use summary::{compute_page_summaries, overfull_pages, PageSummaries, PageSummary, PageTotals};
