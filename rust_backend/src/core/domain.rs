//! Domain models for logbook flights and their page classification.
//!
//! This module provides the core data structures of the logbook: the imported
//! [`FlightRecord`], the user-assigned [`Assignment`] fields, and the composite
//! [`FlightKey`] used to recognise the same flight across spreadsheet re-imports.

use std::fmt;
use std::str::FromStr;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Pilot function on a flight.
///
/// # Examples
///
/// ```
/// use flugbuch_rust::core::domain::Role;
///
/// assert_eq!("PIC".parse::<Role>(), Ok(Role::Pic));
/// assert_eq!(Role::Dual.as_str(), "Dual");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Pilot in command.
    #[serde(rename = "PIC")]
    Pic,
    /// Dual instruction received.
    Dual,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Pic => "PIC",
            Role::Dual => "Dual",
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "PIC" => Ok(Role::Pic),
            "Dual" => Ok(Role::Dual),
            other => Err(format!("unknown role '{}'", other)),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Day or night classification of a flight.
///
/// The German labels `Tag` and `Nacht` written by older logbook snapshots are
/// accepted on input; output always uses `Day` and `Night`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    #[serde(alias = "Tag")]
    Day,
    #[serde(alias = "Nacht")]
    Night,
}

impl TimeOfDay {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Day => "Day",
            TimeOfDay::Night => "Night",
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Day" | "Tag" => Ok(TimeOfDay::Day),
            "Night" | "Nacht" => Ok(TimeOfDay::Night),
            other => Err(format!("unknown time of day '{}'", other)),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a flight across re-imports: date, takeoff time and registration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlightKey {
    pub date: String,
    pub takeoff_time: String,
    pub tail_number: String,
}

impl fmt::Display for FlightKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.date, self.takeoff_time, self.tail_number)
    }
}

/// The user-edited classification fields of a flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Assignment {
    pub role: Option<Role>,
    pub time_of_day: Option<TimeOfDay>,
    pub page: Option<u32>,
}

impl Assignment {
    /// Returns `true` when role, time of day and a non-zero page are all set.
    ///
    /// Page `0` counts as unassigned even though it is a number.
    pub fn is_complete(&self) -> bool {
        self.role.is_some() && self.time_of_day.is_some() && matches!(self.page, Some(p) if p != 0)
    }
}

/// One logged flight.
///
/// Only the identity fields, the classification fields and the two aggregated
/// numbers (`block_time_seconds`, `landing_count`) carry meaning for the logbook
/// logic; the remaining descriptive fields are carried through untouched.
///
/// Deserialization never rejects a record because of a bad value: unreadable
/// text becomes empty, unreadable numbers become zero and unknown role or
/// time-of-day labels become unset.
///
/// A record carrying both the English and the legacy German name of a field is
/// a duplicate-field error for serde; snapshot loaders call
/// [`drop_shadowed_legacy_fields`] first so the English value wins.
///
/// # Examples
///
/// ```
/// use flugbuch_rust::core::domain::{FlightRecord, Role, TimeOfDay};
///
/// let flight = FlightRecord {
///     date: "01.01.26".to_string(),
///     takeoff_time: "10:00".to_string(),
///     tail_number: "OE-AKW".to_string(),
///     role: Some(Role::Pic),
///     time_of_day: Some(TimeOfDay::Day),
///     page: Some(0),
///     ..Default::default()
/// };
///
/// assert!(!flight.is_complete());
/// assert_eq!(flight.assigned_page(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRecord {
    #[serde(default, deserialize_with = "lenient_u32")]
    pub id: u32,
    #[serde(default, alias = "datum", deserialize_with = "lenient_text")]
    pub date: String,
    #[serde(default, alias = "lfz_typ", deserialize_with = "lenient_text")]
    pub aircraft_type: String,
    #[serde(default, alias = "kennzeichen", deserialize_with = "lenient_text")]
    pub tail_number: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub crew: String,
    #[serde(default, alias = "von", deserialize_with = "lenient_text")]
    pub departure: String,
    #[serde(default, alias = "nach", deserialize_with = "lenient_text")]
    pub destination: String,
    #[serde(default, alias = "start", deserialize_with = "lenient_text")]
    pub takeoff_time: String,
    #[serde(default, alias = "landung", deserialize_with = "lenient_text")]
    pub landing_time: String,
    #[serde(default, alias = "block_off", deserialize_with = "lenient_text")]
    pub block_off: String,
    #[serde(default, alias = "block_on", deserialize_with = "lenient_text")]
    pub block_on: String,
    #[serde(default, alias = "landungen", deserialize_with = "lenient_u32")]
    pub landing_count: u32,
    #[serde(default, alias = "flugstunden_sec", deserialize_with = "lenient_u64")]
    pub flight_time_seconds: u64,
    #[serde(default, alias = "blockzeit_sec", deserialize_with = "lenient_u64")]
    pub block_time_seconds: u64,
    #[serde(default, alias = "bemerkung", deserialize_with = "lenient_text")]
    pub remarks: String,
    #[serde(default, alias = "rolle", deserialize_with = "lenient_label")]
    pub role: Option<Role>,
    #[serde(default, alias = "zeit", deserialize_with = "lenient_label")]
    pub time_of_day: Option<TimeOfDay>,
    #[serde(default, alias = "seite", deserialize_with = "lenient_page")]
    pub page: Option<u32>,
}

impl FlightRecord {
    /// Composite identity key used to match flights across imports.
    pub fn key(&self) -> FlightKey {
        FlightKey {
            date: self.date.clone(),
            takeoff_time: self.takeoff_time.clone(),
            tail_number: self.tail_number.clone(),
        }
    }

    /// Current classification fields.
    pub fn assignment(&self) -> Assignment {
        Assignment {
            role: self.role,
            time_of_day: self.time_of_day,
            page: self.page,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.assignment().is_complete()
    }

    /// Page number the flight is counted on, or `None` when unset or `0`.
    pub fn assigned_page(&self) -> Option<u32> {
        self.page.filter(|&p| p != 0)
    }
}

/// Number of flights still missing a role, time of day or page.
pub fn count_incomplete(flights: &[FlightRecord]) -> usize {
    flights.iter().filter(|f| !f.is_complete()).count()
}

/// Legacy German field names accepted on input, paired with the camelCase name
/// they stand for.
pub const LEGACY_FIELD_NAMES: [(&str, &str); 16] = [
    ("date", "datum"),
    ("aircraftType", "lfz_typ"),
    ("tailNumber", "kennzeichen"),
    ("departure", "von"),
    ("destination", "nach"),
    ("takeoffTime", "start"),
    ("landingTime", "landung"),
    ("blockOff", "block_off"),
    ("blockOn", "block_on"),
    ("landingCount", "landungen"),
    ("flightTimeSeconds", "flugstunden_sec"),
    ("blockTimeSeconds", "blockzeit_sec"),
    ("remarks", "bemerkung"),
    ("role", "rolle"),
    ("timeOfDay", "zeit"),
    ("page", "seite"),
];

/// Remove legacy field names whose camelCase counterpart is also present.
///
/// # Returns
/// Number of fields removed
pub fn drop_shadowed_legacy_fields(record: &mut serde_json::Map<String, serde_json::Value>) -> usize {
    let mut removed = 0;
    for (name, legacy) in LEGACY_FIELD_NAMES {
        if record.contains_key(name) && record.remove(legacy).is_some() {
            removed += 1;
        }
    }
    removed
}

// ============ Lenient field decoding ============

/// Any JSON scalar, with everything else swallowed.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseValue {
    Unsigned(u64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LooseValue::deserialize(deserializer)? {
        LooseValue::Text(s) => s,
        LooseValue::Unsigned(n) => n.to_string(),
        LooseValue::Float(f) => f.to_string(),
        LooseValue::Other(_) => String::new(),
    })
}

fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LooseValue::deserialize(deserializer)? {
        LooseValue::Unsigned(n) => n,
        LooseValue::Float(f) if f.is_finite() && f > 0.0 => f.round() as u64,
        LooseValue::Text(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_u64(deserializer).map(|n| u32::try_from(n).unwrap_or(u32::MAX))
}

fn lenient_label<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    Ok(match LooseValue::deserialize(deserializer)? {
        LooseValue::Text(s) => s.parse().ok(),
        _ => None,
    })
}

fn lenient_page<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match LooseValue::deserialize(deserializer)? {
        LooseValue::Unsigned(n) => u32::try_from(n).ok(),
        LooseValue::Float(f) if f >= 0.0 && f.fract() == 0.0 && f <= u32::MAX as f64 => {
            Some(f as u32)
        }
        LooseValue::Text(s) => s.trim().parse().ok(),
        _ => None,
    })
}
