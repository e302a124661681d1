//! Transaction CLI commands
//!
//! Implements CLI commands for transaction management.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{
    format_pending_banner, format_predicted_vs_actual, format_transaction_details,
    format_transaction_page,
};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Category, Money, PaymentStatus, TransactionType};
use crate::reports::{PendingSummary, PredictedVsActual};
use crate::services::{
    paginate, CreateTransactionInput, TransactionFilter, TransactionPatch, TransactionService,
};
use crate::storage::Storage;

use super::{parse_date, parse_month};

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Description
        description: String,
        /// Amount (e.g., "150.00" or "150,00"), always positive
        amount: String,
        /// Category code or label (e.g., MORADIA, "Alimentação")
        #[arg(short, long)]
        category: String,
        /// Transaction type (income, expense); defaults to the category's type
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Mark as pending instead of paid
        #[arg(long)]
        pending: bool,
    },
    /// List transactions
    List {
        /// Restrict to a month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
        /// Filter by type (income, expense)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// Filter by category code or label
        #[arg(short = 'C', long)]
        category: Option<String>,
        /// Filter by status (paid, pending)
        #[arg(long)]
        status: Option<String>,
        /// Search description, id or amount
        #[arg(short, long)]
        search: Option<String>,
        /// Page number (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,
        /// Rows per page (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID (or unique prefix)
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID (or unique prefix)
        id: String,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New type (income, expense)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New status (paid, pending)
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID (or unique prefix)
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
    /// List the available categories
    Categories {
        /// Only categories for this type (income, expense)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },
}

fn parse_kind(s: &str) -> FinanceResult<TransactionType> {
    s.parse::<TransactionType>().map_err(FinanceError::Validation)
}

fn parse_status(s: &str) -> FinanceResult<PaymentStatus> {
    s.parse::<PaymentStatus>().map_err(FinanceError::Validation)
}

fn parse_category(s: &str) -> FinanceResult<Category> {
    s.parse::<Category>()
        .map_err(|e| FinanceError::Validation(e.to_string()))
}

fn parse_amount(s: &str) -> FinanceResult<Money> {
    Money::parse(s).map_err(|e| FinanceError::Validation(e.to_string()))
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FinanceResult<()> {
    let service = TransactionService::new(storage);
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            category,
            kind,
            date,
            pending,
        } => {
            let category = parse_category(&category)?;
            let kind = match kind {
                Some(k) => parse_kind(&k)?,
                None => category.kind(),
            };
            let date = match date {
                Some(d) => parse_date(&d)?,
                None => chrono::Local::now().date_naive(),
            };

            let txn = service.create(CreateTransactionInput {
                description,
                amount: parse_amount(&amount)?,
                kind,
                category,
                date,
                status: if pending {
                    PaymentStatus::Pending
                } else {
                    PaymentStatus::Paid
                },
            })?;

            println!("Created transaction:");
            println!("  ID:       {}", txn.id);
            println!("  Date:     {}", txn.date.format(&settings.date_format));
            println!("  Amount:   {}", txn.amount.format_with_symbol(symbol));
            println!("  Type:     {}", txn.kind);
            println!("  Category: {}", txn.category.label());
            println!("  Status:   {}", txn.status);
        }

        TransactionCommands::List {
            month,
            from,
            to,
            kind,
            category,
            status,
            search,
            page,
            page_size,
        } => {
            let mut filter = TransactionFilter::new();
            if let Some(m) = month {
                let month = parse_month(&m)?;
                filter = filter.date_range(month.start_date(), month.end_date());
            }
            if let Some(f) = from {
                filter = filter.since(parse_date(&f)?);
            }
            if let Some(t) = to {
                filter = filter.until(parse_date(&t)?);
            }
            if let Some(k) = kind {
                filter = filter.kind(parse_kind(&k)?);
            }
            if let Some(c) = category {
                filter = filter.category(parse_category(&c)?);
            }
            if let Some(s) = status {
                filter = filter.status(parse_status(&s)?);
            }
            if let Some(s) = search {
                filter = filter.search(s);
            }

            let transactions = service.list(&filter)?;
            let split = PredictedVsActual::from_transactions(&transactions);
            let pending = PendingSummary::from_transactions(&transactions);

            let page = paginate(
                transactions,
                page,
                page_size.unwrap_or(settings.page_size),
            );
            print!("{}", format_transaction_page(&page, &settings.date_format));

            if page.total > 0 {
                println!();
                if let Some(banner) = format_pending_banner(&pending, symbol) {
                    println!("{}", banner);
                }
                print!("{}", format_predicted_vs_actual(&split, symbol));
            }
        }

        TransactionCommands::Show { id } => {
            let txn = service.find(&id)?;
            print!(
                "{}",
                format_transaction_details(&txn, symbol, &settings.date_format)
            );
            if let Some(row) = storage.sheet.row_number(&txn.id)? {
                println!("Sheet row:   {}", row);
            }
        }

        TransactionCommands::Edit {
            id,
            description,
            amount,
            kind,
            category,
            date,
            status,
        } => {
            let txn = service.find(&id)?;

            let patch = TransactionPatch {
                description,
                amount: amount.as_deref().map(parse_amount).transpose()?,
                kind: kind.as_deref().map(parse_kind).transpose()?,
                category: category.as_deref().map(parse_category).transpose()?,
                date: date.as_deref().map(parse_date).transpose()?,
                status: status.as_deref().map(parse_status).transpose()?,
            };

            if patch.is_empty() {
                println!("No changes specified.");
                return Ok(());
            }

            let updated = service.update(&txn.id, patch)?;
            println!("Updated transaction: {}", updated.id);
            println!("  Date:     {}", updated.date.format(&settings.date_format));
            println!("  Amount:   {}", updated.amount.format_with_symbol(symbol));
            println!("  Category: {}", updated.category.label());
            println!("  Status:   {}", updated.status);
        }

        TransactionCommands::Delete { id, force } => {
            let txn = service.find(&id)?;

            if !force {
                println!("About to delete transaction:");
                println!("  Date:        {}", txn.date.format(&settings.date_format));
                println!("  Description: {}", txn.description);
                println!("  Amount:      {}", txn.amount.format_with_symbol(symbol));
                println!();
                println!("Use --force to confirm deletion");
                return Ok(());
            }

            let deleted = service.delete(&txn.id)?;
            println!("Deleted transaction: {} ({})", deleted.id, deleted.description);
        }

        TransactionCommands::Categories { kind } => {
            let kinds = match kind {
                Some(k) => vec![parse_kind(&k)?],
                None => vec![TransactionType::Expense, TransactionType::Income],
            };

            for kind in kinds {
                println!("{}:", kind);
                for category in Category::for_type(kind) {
                    println!("  {:<16} {}", category.code(), category.label());
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_parsers() {
        assert_eq!(parse_kind("income").unwrap(), TransactionType::Income);
        assert!(parse_kind("transfer").unwrap_err().is_validation());
        assert_eq!(parse_status("PENDENTE").unwrap(), PaymentStatus::Pending);
        assert_eq!(parse_category("moradia").unwrap(), Category::Moradia);
        assert!(parse_category("rent").unwrap_err().is_validation());
        assert_eq!(parse_amount("10,50").unwrap().cents(), 1050);
        assert!(parse_amount("ten").is_err());
    }
}
