use anyhow::Result;
use serde::Deserialize;

use crate::config::ImportSettings;
use crate::core::cell::CellValue;
use crate::core::domain::FlightRecord;
use crate::time::{excel_date_to_string, excel_time_to_hhmm, excel_time_to_seconds};

/// Raw JSON structure for one spreadsheet row, keyed by column header
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRow {
    #[serde(rename = "Datum")]
    date: CellValue,
    #[serde(rename = "Lfz-Typ")]
    aircraft_type: CellValue,
    #[serde(rename = "Kennzeichen")]
    tail_number: CellValue,
    #[serde(rename = "Crew")]
    crew: CellValue,
    #[serde(rename = "Von")]
    departure: CellValue,
    #[serde(rename = "Nach")]
    destination: CellValue,
    #[serde(rename = "Start")]
    takeoff: CellValue,
    #[serde(rename = "Landung")]
    landing: CellValue,
    #[serde(rename = "Block off")]
    block_off: CellValue,
    #[serde(rename = "Block on")]
    block_on: CellValue,
    #[serde(rename = "Landungen")]
    landings: CellValue,
    #[serde(rename = "Flugzeit")]
    flight_time: CellValue,
    #[serde(rename = "Blockzeit")]
    block_time: CellValue,
    #[serde(rename = "Bemerkung")]
    remarks: CellValue,
}

impl RawRow {
    fn cells(&self) -> [&CellValue; 14] {
        [
            &self.date,
            &self.aircraft_type,
            &self.tail_number,
            &self.crew,
            &self.departure,
            &self.destination,
            &self.takeoff,
            &self.landing,
            &self.block_off,
            &self.block_on,
            &self.landings,
            &self.flight_time,
            &self.block_time,
            &self.remarks,
        ]
    }

    fn is_blank(&self) -> bool {
        self.cells().iter().all(|cell| cell.is_blank())
    }
}

/// Container for the exported workbook
#[derive(Debug, Deserialize)]
struct LogbookJson {
    #[serde(rename = "Flugbuch")]
    rows: Vec<RawRow>,
}

/// Parse an exported logbook workbook from a string.
///
/// Rows where every column is empty are dropped; the rest are numbered from 1
/// in file order and pre-classified with the import defaults.
pub fn parse_logbook_json_str(json_str: &str, settings: &ImportSettings) -> Result<Vec<FlightRecord>> {
    let deserializer = &mut serde_json::Deserializer::from_str(json_str);
    let logbook: LogbookJson = serde_path_to_error::deserialize(deserializer).map_err(|e| {
        let path = e.path().to_string();
        anyhow::anyhow!("JSON deserialization error at '{}': {}", path, e.into_inner())
    })?;

    let total_rows = logbook.rows.len();
    let flights: Vec<FlightRecord> = logbook
        .rows
        .into_iter()
        .filter(|row| !row.is_blank())
        .enumerate()
        .map(|(idx, row)| convert_row(row, idx as u32 + 1, settings))
        .collect();

    log::info!(
        "Parsed {} flights ({} blank rows skipped)",
        flights.len(),
        total_rows - flights.len()
    );

    Ok(flights)
}

/// Convert a raw spreadsheet row to the domain model
fn convert_row(row: RawRow, id: u32, settings: &ImportSettings) -> FlightRecord {
    FlightRecord {
        id,
        date: excel_date_to_string(&row.date),
        aircraft_type: row.aircraft_type.as_text(),
        tail_number: row.tail_number.as_text(),
        crew: row.crew.as_text(),
        departure: row.departure.as_text(),
        destination: row.destination.as_text(),
        takeoff_time: excel_time_to_hhmm(&row.takeoff),
        landing_time: excel_time_to_hhmm(&row.landing),
        block_off: excel_time_to_hhmm(&row.block_off),
        block_on: excel_time_to_hhmm(&row.block_on),
        landing_count: row.landings.as_count(),
        flight_time_seconds: excel_time_to_seconds(&row.flight_time),
        block_time_seconds: excel_time_to_seconds(&row.block_time),
        remarks: row.remarks.as_text(),
        role: Some(settings.default_role),
        time_of_day: Some(settings.default_time_of_day),
        page: settings.seed_page(),
    }
}
