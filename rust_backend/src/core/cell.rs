//! Raw spreadsheet cell values.
//!
//! The logbook spreadsheet is exported cell-by-cell, so a single column can hold
//! numbers (Excel serial dates and day fractions), text (already formatted times,
//! registrations) or nothing at all. [`CellValue`] keeps that shape intact until
//! the import converts it.

use serde::{Deserialize, Deserializer, Serialize};

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
}

impl CellValue {
    /// Returns `true` for empty cells and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Text content of the cell, with numbers and booleans rendered as text.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Number(n) if n.fract() == 0.0 => format!("{}", *n as i64),
            CellValue::Number(n) => n.to_string(),
            CellValue::Bool(b) => b.to_string(),
        }
    }

    /// Non-negative whole count (e.g. landings). Unreadable cells count as zero.
    pub fn as_count(&self) -> u32 {
        match self {
            CellValue::Number(n) if n.is_finite() && *n > 0.0 => n.round() as u32,
            CellValue::Text(s) => s.trim().parse::<u32>().unwrap_or(0),
            _ => 0,
        }
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl<'de> Deserialize<'de> for CellValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawCell {
            Number(f64),
            Text(String),
            Bool(bool),
            Other(serde::de::IgnoredAny),
        }

        // `null` lands in `Other` as well; nested arrays/objects are not cell values.
        Ok(match RawCell::deserialize(deserializer)? {
            RawCell::Number(n) => CellValue::Number(n),
            RawCell::Text(s) => CellValue::Text(s),
            RawCell::Bool(b) => CellValue::Bool(b),
            RawCell::Other(_) => CellValue::Empty,
        })
    }
}
