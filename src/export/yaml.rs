//! YAML Export functionality
//!
//! Exports every transaction to YAML format for human-readable backup.

use crate::error::{FinanceError, FinanceResult};
use crate::export::json::FullExport;
use crate::storage::Storage;
use std::io::Write;

/// Export every transaction to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> FinanceResult<()> {
    let export = FullExport::from_storage(storage)?;
    let header_err = |e: std::io::Error| FinanceError::Export(e.to_string());

    writeln!(writer, "# fintrack transaction export").map_err(header_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(header_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(header_err)?;
    writeln!(writer).map_err(header_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}
