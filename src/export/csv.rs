//! CSV Export functionality
//!
//! Exports transactions to a spreadsheet-friendly CSV layout.

use crate::error::{FinanceError, FinanceResult};
use crate::models::Transaction;
use crate::storage::Storage;
use std::io::Write;

const EXPORT_HEADER: [&str; 8] = [
    "ID",
    "Date",
    "Description",
    "Type",
    "Category",
    "Amount",
    "Signed Amount",
    "Status",
];

/// Export all transactions to CSV
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: &mut W) -> FinanceResult<()> {
    write_transactions_csv(&storage.sheet.find_all()?, writer)
}

/// Write transactions as CSV, one row each
pub fn write_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> FinanceResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer
        .write_record(EXPORT_HEADER)
        .map_err(|e| FinanceError::Export(e.to_string()))?;

    for txn in transactions {
        csv_writer
            .write_record([
                txn.id.to_string(),
                txn.date.format("%Y-%m-%d").to_string(),
                txn.description.clone(),
                txn.kind.code().to_string(),
                txn.category.code().to_string(),
                txn.amount.to_string(),
                txn.signed_amount().to_string(),
                txn.status.code().to_string(),
            ])
            .map_err(|e| FinanceError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| FinanceError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, PaymentStatus, TransactionType};
    use chrono::NaiveDate;

    #[test]
    fn test_csv_rows_and_escaping() {
        let txn = Transaction::new(
            "Dinner, with \"friends\"",
            Money::from_cents(8990),
            TransactionType::Expense,
            Category::Lazer,
            NaiveDate::from_ymd_opt(2025, 1, 18).unwrap(),
            PaymentStatus::Paid,
        );

        let mut output = Vec::new();
        write_transactions_csv(&[txn.clone()], &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "ID,Date,Description,Type,Category,Amount,Signed Amount,Status"
        );
        assert_eq!(
            lines[1],
            format!(
                "{},2025-01-18,\"Dinner, with \"\"friends\"\"\",EXPENSE,LAZER,89.90,-89.90,PAID",
                txn.id
            )
        );
    }

    #[test]
    fn test_empty_export_has_header() {
        let mut output = Vec::new();
        write_transactions_csv(&[], &mut output).unwrap();
        assert_eq!(output.iter().filter(|b| **b == b'\n').count(), 1);
    }
}
