//! High-level data loading utilities.
//!
//! Loaders combine file access with parsing and attach error context, so callers
//! get ready-to-use flight lists. Nothing here writes files.
//!
//! # Example
//!
//! ```no_run
//! use flugbuch_rust::config::ImportSettings;
//! use flugbuch_rust::io::loaders::LogbookLoader;
//! use std::path::Path;
//!
//! let result = LogbookLoader::load_import(Path::new("flugbuch.json"), &ImportSettings::default())
//!     .expect("Failed to load");
//! println!("Loaded {} flights ({})", result.num_flights, result.checksum);
//! ```

pub mod loaders;


pub use loaders::{calculate_checksum, ImportResult, LogbookLoader};
