//! Core domain models for the flight logbook.
//!
//! This module defines the fundamental data structures used throughout the crate:
//! imported flight records, their user-assigned classification and raw spreadsheet cells.

pub mod cell;
pub mod domain;

pub use cell::CellValue;
pub use domain::{count_incomplete, drop_shadowed_legacy_fields, Assignment, FlightKey, FlightRecord, Role, TimeOfDay};
