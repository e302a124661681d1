//! Transaction display formatting
//!
//! Table and detail views of transactions for terminal output.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Transaction, TransactionType};
use crate::services::Page;

use super::report::truncate;

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl TransactionRow {
    fn new(txn: &Transaction, date_format: &str) -> Self {
        let sign = match txn.kind {
            TransactionType::Income => "+",
            TransactionType::Expense => "-",
        };

        Self {
            id: txn.id.short().to_string(),
            date: txn.date.format(date_format).to_string(),
            description: truncate(&txn.description, 30),
            category: txn.category.label().to_string(),
            amount: format!("{}{}", sign, txn.amount),
            status: txn.status.to_string(),
        }
    }
}

/// Format transactions as a table
pub fn format_transaction_table(transactions: &[Transaction], date_format: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|t| TransactionRow::new(t, date_format))
        .collect();

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Modify::new(Columns::single(4)).with(Alignment::right()));

    format!("{}\n", table)
}

/// Format one page of transactions with a page footer
pub fn format_transaction_page(page: &Page<Transaction>, date_format: &str) -> String {
    let mut output = format_transaction_table(&page.items, date_format);
    if page.total > 0 {
        output.push_str(&format!(
            "Page {} of {} ({} transactions)\n",
            page.page,
            page.total_pages.max(1),
            page.total
        ));
        if page.has_next() {
            output.push_str(&format!("Next page: --page {}\n", page.page + 1));
        }
    }
    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str, date_format: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Description: {}\n", txn.description));
    output.push_str(&format!("Date:        {}\n", txn.date.format(date_format)));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Category:    {} ({})\n", txn.category.label(), txn.category.code()));
    output.push_str(&format!("Amount:      {}\n", txn.amount.format_with_symbol(symbol)));
    output.push_str(&format!("Status:      {}\n", txn.status));
    output.push_str(&format!(
        "Created:     {}\n",
        txn.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    output.push_str(&format!(
        "Updated:     {}\n",
        txn.updated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    output
}
