//! Export module for fintrack
//!
//! Provides complete transaction export in multiple formats:
//! - CSV: spreadsheet-compatible rows
//! - JSON: machine-readable export with schema version
//! - YAML: human-readable export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_transactions_csv, write_transactions_csv};
pub use json::{export_full_json, ExportMetadata, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
