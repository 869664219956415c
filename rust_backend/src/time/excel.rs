use chrono::{Duration, NaiveDate};

use crate::core::cell::CellValue;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert an Excel time value (fraction of a day) to whole seconds.
///
/// # Arguments
/// * `value` - Spreadsheet cell, e.g. `0.5` for twelve hours
///
/// # Returns
/// * `u64` - Rounded seconds; empty, text and boolean cells yield `0`, as do negative values
///
/// # Example
/// ```
/// use flugbuch_rust::core::CellValue;
/// use flugbuch_rust::time::excel_time_to_seconds;
///
/// assert_eq!(excel_time_to_seconds(&CellValue::Number(0.5)), 43_200);
/// assert_eq!(excel_time_to_seconds(&CellValue::Empty), 0);
/// ```
pub fn excel_time_to_seconds(value: &CellValue) -> u64 {
    match value {
        CellValue::Number(days) => day_fraction_to_seconds(*days),
        _ => 0,
    }
}

/// Convert an Excel time value to an `HH:MM` label.
///
/// Text cells are assumed to be formatted already and pass through unchanged.
/// Empty cells give an empty string.
pub fn excel_time_to_hhmm(value: &CellValue) -> String {
    match value {
        CellValue::Empty => String::new(),
        CellValue::Text(s) => s.clone(),
        CellValue::Number(days) => {
            let total = day_fraction_to_seconds(*days);
            let hours = total / 3600;
            let minutes = (total % 3600) / 60;
            format!("{:02}:{:02}", hours, minutes)
        }
        CellValue::Bool(b) => b.to_string(),
    }
}

/// Format a second count as `H:MM` for display.
///
/// Hours are not padded, minutes always have two digits, and partial minutes are
/// dropped rather than rounded.
///
/// # Example
/// ```
/// use flugbuch_rust::time::sec_to_hm;
///
/// assert_eq!(sec_to_hm(35_520), "9:52");
/// assert_eq!(sec_to_hm(198_600), "55:10");
/// assert_eq!(sec_to_hm(0), "0:00");
/// ```
pub fn sec_to_hm(seconds: u64) -> String {
    if seconds == 0 {
        return "0:00".to_string();
    }
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{}:{:02}", hours, minutes)
}

/// Convert an Excel date cell to the logbook's `DD.MM.YY` form.
///
/// Numeric cells are serial dates in the 1900 date system (day 1 = 1900-01-01,
/// with the 1900 leap-year quirk folded into the 1899-12-30 epoch). Text cells
/// pass through trimmed; anything else yields an empty string.
pub fn excel_date_to_string(value: &CellValue) -> String {
    match value {
        CellValue::Text(s) => s.trim().to_string(),
        CellValue::Number(serial) if serial.is_finite() && *serial >= 1.0 => {
            excel_epoch()
                .zip(Duration::try_days(serial.floor() as i64))
                .and_then(|(epoch, offset)| epoch.checked_add_signed(offset))
                .map(|date| date.format("%d.%m.%y").to_string())
                .unwrap_or_default()
        }
        _ => String::new(),
    }
}

fn excel_epoch() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1899, 12, 30)
}

fn day_fraction_to_seconds(days: f64) -> u64 {
    let seconds = (days * SECONDS_PER_DAY).round();
    if seconds.is_finite() && seconds > 0.0 {
        seconds as u64
    } else {
        0
    }
}
