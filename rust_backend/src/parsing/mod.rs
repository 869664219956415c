//! Parsers for exported logbook spreadsheets.
//!
//! The workbook is exported as JSON, one object per spreadsheet row keyed by the
//! German column headers. Parsing resolves Excel dates and day fractions into the
//! display strings and second counts carried by
//! [`FlightRecord`](crate::core::domain::FlightRecord).
//!
//! # Parsers
//!
//! - [`json_parser`]: Parse the `Flugbuch` sheet of an exported workbook
//!
//! # Example
//!
//! ```
//! use flugbuch_rust::config::ImportSettings;
//! use flugbuch_rust::parsing::parse_logbook_json_str;
//!
//! let json = r#"{ "Flugbuch": [ { "Datum": 46023, "Start": "10:00", "Kennzeichen": "OE-AKW" } ] }"#;
//! let flights = parse_logbook_json_str(json, &ImportSettings::default()).unwrap();
//! assert_eq!(flights[0].date, "01.01.26");
//! ```
//!
//! Reading from disk goes through [`LogbookLoader`](crate::io::LogbookLoader),
//! which also checksums the file.

pub mod json_parser;


pub use json_parser::parse_logbook_json_str;
