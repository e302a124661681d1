//! JSON Export functionality
//!
//! Exports every transaction to JSON format with schema versioning.

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, Transaction};
use crate::reports::PeriodSummary;
use crate::storage::Storage;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All transactions in sheet order
    pub transactions: Vec<Transaction>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub pending_count: usize,
    pub total_income: Money,
    pub total_expense: Money,
    pub earliest_transaction: Option<NaiveDate>,
    pub latest_transaction: Option<NaiveDate>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> FinanceResult<Self> {
        Ok(Self::from_transactions(storage.sheet.find_all()?))
    }

    pub fn from_transactions(transactions: Vec<Transaction>) -> Self {
        let totals = PeriodSummary::from_transactions(&transactions);

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            pending_count: transactions.iter().filter(|t| t.is_pending()).count(),
            total_income: totals.total_income,
            total_expense: totals.total_expense,
            earliest_transaction: transactions.iter().map(|t| t.date).min(),
            latest_transaction: transactions.iter().map(|t| t.date).max(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transactions,
            metadata,
        }
    }
}

/// Export every transaction to JSON
pub fn export_full_json<W: Write>(
    storage: &Storage,
    writer: &mut W,
    pretty: bool,
) -> FinanceResult<()> {
    let export = FullExport::from_storage(storage)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| FinanceError::Export(e.to_string()))?;

    Ok(())
}
