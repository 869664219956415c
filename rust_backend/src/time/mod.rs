//! Spreadsheet time conversions and duration formatting.

pub mod excel;

pub use excel::{excel_date_to_string, excel_time_to_hhmm, excel_time_to_seconds, sec_to_hm};
