use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::path::Path;

use crate::config::ImportSettings;
use crate::core::domain::{drop_shadowed_legacy_fields, FlightRecord};
use crate::parsing::json_parser;

/// Result of importing an exported workbook
#[derive(Debug, Clone)]
pub struct ImportResult {
    pub flights: Vec<FlightRecord>,
    /// SHA-256 of the raw file content, hex encoded
    pub checksum: String,
    pub num_flights: usize,
}

impl ImportResult {
    pub fn new(flights: Vec<FlightRecord>, checksum: String) -> Self {
        let num_flights = flights.len();
        Self {
            flights,
            checksum,
            num_flights,
        }
    }
}

/// Unified interface for loading logbook data
pub struct LogbookLoader;

impl LogbookLoader {
    /// Import a workbook export, pre-classifying every flight with `settings`
    pub fn load_import(path: &Path, settings: &ImportSettings) -> Result<ImportResult> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read import file: {}", path.display()))?;

        Self::load_import_str(&content, settings)
    }

    /// Import a workbook export held in memory
    pub fn load_import_str(content: &str, settings: &ImportSettings) -> Result<ImportResult> {
        let checksum = calculate_checksum(content);
        let flights = json_parser::parse_logbook_json_str(content, settings)
            .context("Failed to parse logbook import")?;

        log::debug!("Import checksum {}", checksum);
        Ok(ImportResult::new(flights, checksum))
    }

    /// Load a previously saved flight list (a JSON array of flight records)
    pub fn load_snapshot(path: &Path) -> Result<Vec<FlightRecord>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot file: {}", path.display()))?;

        Self::load_snapshot_str(&content)
            .with_context(|| format!("Failed to parse snapshot file: {}", path.display()))
    }

    /// Load a saved flight list from a JSON string.
    ///
    /// Records written with both English and legacy German field names keep the
    /// English value.
    pub fn load_snapshot_str(json_str: &str) -> Result<Vec<FlightRecord>> {
        let mut records: Vec<serde_json::Value> =
            serde_json::from_str(json_str).context("Snapshot must be a JSON array")?;

        let shadowed: usize = records
            .iter_mut()
            .filter_map(serde_json::Value::as_object_mut)
            .map(drop_shadowed_legacy_fields)
            .sum();
        if shadowed > 0 {
            log::warn!("Ignored {} legacy snapshot fields shadowed by their English names", shadowed);
        }

        let flights: Vec<FlightRecord> =
            serde_path_to_error::deserialize(serde_json::Value::Array(records)).map_err(|e| {
                let path = e.path().to_string();
                anyhow::anyhow!("Snapshot deserialization error at '{}': {}", path, e.into_inner())
            })?;

        log::info!("Loaded {} flights from snapshot", flights.len());
        Ok(flights)
    }
}

/// Calculate SHA-256 checksum of import content.
///
/// # Arguments
/// * `content` - Raw file content
///
/// # Returns
/// Hexadecimal string representation of the SHA-256 hash.
pub fn calculate_checksum(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    hex::encode(result)
}
