//! Transaction sheet repository
//!
//! The sheet is a CSV file laid out like a spreadsheet tab: row 1 holds the
//! column headers, every following row is one transaction. Mutations are
//! written through to disk immediately.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use csv::StringRecord;
use tracing::{debug, warn};

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Category, Money, PaymentStatus, Transaction, TransactionId, TransactionType};

use super::file_io::write_atomic;

/// Column order of the sheet
pub const SHEET_COLUMNS: [&str; 9] = [
    "id",
    "description",
    "amount",
    "type",
    "category",
    "date",
    "status",
    "createdAt",
    "updatedAt",
];

/// Sheet row number of the first data row (row 1 is the header)
const FIRST_DATA_ROW: usize = 2;

/// Repository for the transaction sheet
pub struct SheetRepository {
    path: PathBuf,
    rows: RwLock<Vec<Transaction>>,
}

impl SheetRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            rows: RwLock::new(Vec::new()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Write the header row if the sheet is missing or empty
    ///
    /// Returns true when the header was written.
    pub fn initialize(&self) -> FinanceResult<bool> {
        let is_empty = match std::fs::metadata(&self.path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        };

        if !is_empty {
            return Ok(false);
        }

        write_rows(&self.path, &[])?;
        debug!(path = %self.path.display(), "initialized sheet header");
        Ok(true)
    }

    /// Load all rows from disk
    pub fn load(&self) -> FinanceResult<()> {
        let parsed = if self.path.exists() {
            let file = std::fs::File::open(&self.path).map_err(|e| {
                FinanceError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;
            parse_sheet(file)?
        } else {
            Vec::new()
        };

        if parsed.is_empty() {
            warn!(path = %self.path.display(), "sheet has no transactions");
        } else {
            debug!(rows = parsed.len(), "loaded transaction sheet");
        }

        *self.write_lock()? = parsed;
        Ok(())
    }

    /// All transactions in sheet order
    pub fn find_all(&self) -> FinanceResult<Vec<Transaction>> {
        Ok(self.read_lock()?.clone())
    }

    pub fn find_by_id(&self, id: &TransactionId) -> FinanceResult<Option<Transaction>> {
        Ok(self.read_lock()?.iter().find(|t| &t.id == id).cloned())
    }

    /// Sheet row number holding a transaction (header is row 1)
    pub fn row_number(&self, id: &TransactionId) -> FinanceResult<Option<usize>> {
        Ok(self
            .read_lock()?
            .iter()
            .position(|t| &t.id == id)
            .map(|idx| idx + FIRST_DATA_ROW))
    }

    /// Append a new row
    pub fn append(&self, txn: Transaction) -> FinanceResult<()> {
        let mut rows = self.write_lock()?;
        if rows.iter().any(|t| t.id == txn.id) {
            return Err(FinanceError::Storage(format!(
                "Transaction id already present in sheet: {}",
                txn.id
            )));
        }

        let mut updated = rows.clone();
        updated.push(txn);
        write_rows(&self.path, &updated)?;
        *rows = updated;
        Ok(())
    }

    /// Replace the row holding `txn.id`
    ///
    /// Returns false when no such row exists.
    pub fn update(&self, txn: Transaction) -> FinanceResult<bool> {
        let mut rows = self.write_lock()?;
        let Some(index) = rows.iter().position(|t| t.id == txn.id) else {
            return Ok(false);
        };

        let mut updated = rows.clone();
        updated[index] = txn;
        write_rows(&self.path, &updated)?;
        *rows = updated;
        Ok(true)
    }

    /// Remove the row holding `id`
    ///
    /// Returns false when no such row exists.
    pub fn delete(&self, id: &TransactionId) -> FinanceResult<bool> {
        let mut rows = self.write_lock()?;
        let Some(index) = rows.iter().position(|t| &t.id == id) else {
            return Ok(false);
        };

        let mut updated = rows.clone();
        updated.remove(index);
        write_rows(&self.path, &updated)?;
        *rows = updated;
        Ok(true)
    }

    pub fn count(&self) -> FinanceResult<usize> {
        Ok(self.read_lock()?.len())
    }

    fn read_lock(&self) -> FinanceResult<std::sync::RwLockReadGuard<'_, Vec<Transaction>>> {
        self.rows
            .read()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_lock(&self) -> FinanceResult<std::sync::RwLockWriteGuard<'_, Vec<Transaction>>> {
        self.rows
            .write()
            .map_err(|e| FinanceError::Storage(format!("Failed to acquire write lock: {}", e)))
    }
}

/// Parse a sheet from any reader
pub fn parse_sheet<R: Read>(reader: R) -> FinanceResult<Vec<Transaction>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    if headers.get(0).map(str::trim) != Some(SHEET_COLUMNS[0]) {
        return Err(FinanceError::Storage(format!(
            "Unexpected sheet header: expected first column '{}'",
            SHEET_COLUMNS[0]
        )));
    }

    let mut transactions = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let row = index + FIRST_DATA_ROW;
        let record = record?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        transactions.push(row_to_transaction(&record, row)?);
    }

    Ok(transactions)
}

/// Convert a sheet row into a transaction
pub fn row_to_transaction(record: &StringRecord, row: usize) -> FinanceResult<Transaction> {
    let cell = |idx: usize| record.get(idx).map(str::trim).unwrap_or("");
    let bad = |column: &str, detail: String| {
        FinanceError::Storage(format!("Sheet row {}: invalid {}: {}", row, column, detail))
    };

    let id = cell(0)
        .parse::<TransactionId>()
        .map_err(|e| bad("id", e.to_string()))?;

    let amount = Money::parse(cell(2)).map_err(|e| bad("amount", e.to_string()))?;
    let kind = cell(3)
        .parse::<TransactionType>()
        .map_err(|e| bad("type", e))?;
    let category = cell(4)
        .parse::<Category>()
        .map_err(|e| bad("category", e.to_string()))?;
    let date = parse_sheet_date(cell(5)).ok_or_else(|| bad("date", cell(5).to_string()))?;

    // Rows written before the status column existed count as paid
    let status = match cell(6) {
        "" => PaymentStatus::Paid,
        other => other
            .parse::<PaymentStatus>()
            .map_err(|e| bad("status", e))?,
    };

    let fallback = date.and_time(NaiveTime::MIN).and_utc();
    let created_at = parse_timestamp(cell(7)).unwrap_or(fallback);
    let updated_at = parse_timestamp(cell(8)).unwrap_or(created_at);

    Ok(Transaction {
        id,
        description: cell(1).to_string(),
        amount,
        kind,
        category,
        date,
        status,
        created_at,
        updated_at,
    })
}

/// Convert a transaction into a sheet row
pub fn transaction_to_row(txn: &Transaction) -> [String; 9] {
    [
        txn.id.to_string(),
        txn.description.clone(),
        txn.amount.to_string(),
        txn.kind.code().to_string(),
        txn.category.code().to_string(),
        txn.date.format("%Y-%m-%d").to_string(),
        txn.status.code().to_string(),
        txn.created_at.to_rfc3339(),
        txn.updated_at.to_rfc3339(),
    ]
}

/// Accepts "2024-01-05" and full timestamps such as "2024-01-05T00:00:00.000Z"
fn parse_sheet_date(s: &str) -> Option<NaiveDate> {
    let day = s.get(..10).unwrap_or(s);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn write_rows(path: &Path, rows: &[Transaction]) -> FinanceResult<()> {
    write_atomic(path, |writer| {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(SHEET_COLUMNS)?;
        for txn in rows {
            csv_writer.write_record(transaction_to_row(txn))?;
        }
        csv_writer.flush()?;
        Ok(())
    })
}
