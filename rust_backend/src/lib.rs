//! Flight logbook backend.
//!
//! Imports flights exported from the logbook spreadsheet, carries the user's
//! role / time-of-day / page classification across re-imports, and computes
//! the per-page footer totals of the printed logbook.
//!
//! # Modules
//!
//! - [`core`]: Flight records, classification types and spreadsheet cells
//! - [`time`]: Excel time and date conversion, `H:MM` formatting
//! - [`algorithms`]: Assignment merge and page summaries
//! - [`parsing`]: Workbook JSON import
//! - [`io`]: File loaders
//! - [`config`]: `flugbuch.toml` settings
//! - [`report`]: Text rendering of page totals

pub mod algorithms;
pub mod config;
pub mod core;
pub mod io;
pub mod parsing;
pub mod report;
pub mod time;
