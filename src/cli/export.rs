//! CLI commands for data export
//!
//! Writes the transaction sheet as CSV, JSON or YAML.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use chrono::Local;
use clap::ValueEnum;

use crate::error::{FinanceError, FinanceResult};
use crate::export::{export_full_json, export_full_yaml, export_transactions_csv};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (spreadsheet rows)
    Csv,
    /// JSON format with schema version and metadata
    Json,
    /// YAML format (human-readable)
    Yaml,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

/// Handle `export`
///
/// Without an explicit output path the file lands in the export directory
/// as `fintrack-export-<timestamp>.<ext>`.
pub fn handle_export_command(
    storage: &Storage,
    format: ExportFormat,
    output: Option<PathBuf>,
    pretty: bool,
) -> FinanceResult<PathBuf> {
    let output = match output {
        Some(path) => path,
        None => {
            let dir = storage.paths().export_dir();
            std::fs::create_dir_all(&dir)?;
            dir.join(format!(
                "fintrack-export-{}.{}",
                Local::now().format("%Y%m%d-%H%M%S"),
                format.extension()
            ))
        }
    };

    let file = File::create(&output).map_err(|e| {
        FinanceError::Export(format!("Failed to create file {}: {}", output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match format {
        ExportFormat::Csv => export_transactions_csv(storage, &mut writer)?,
        ExportFormat::Json => export_full_json(storage, &mut writer, pretty)?,
        ExportFormat::Yaml => export_full_yaml(storage, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| FinanceError::Export(format!("Failed to write export: {}", e)))?;

    println!(
        "Exported {} transactions to: {}",
        storage.sheet.count()?,
        output.display()
    );

    Ok(output)
}
