//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod config;
pub mod export;
pub mod report;
pub mod transaction;

pub use audit::handle_audit_command;
pub use config::{handle_config_command, ConfigCommands};
pub use export::{handle_export_command, ExportFormat};
pub use report::{handle_report_command, ReportCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};

use chrono::{Local, NaiveDate};

use crate::error::{FinanceError, FinanceResult};
use crate::models::Month;

/// Parse a YYYY-MM-DD date argument
pub(crate) fn parse_date(s: &str) -> FinanceResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        FinanceError::Validation(format!("Invalid date format: {}. Use YYYY-MM-DD", s))
    })
}

/// Parse a YYYY-MM month argument
pub(crate) fn parse_month(s: &str) -> FinanceResult<Month> {
    Month::parse(s).map_err(|e| {
        FinanceError::Validation(format!("{}. Use YYYY-MM (e.g., 2025-01)", e))
    })
}

/// Resolve the reference date from `--date` or `--month`
///
/// `--date` wins; `--month` selects the first day of that month; with
/// neither, today's local date is used.
pub(crate) fn reference_date(
    month: Option<&str>,
    date: Option<&str>,
) -> FinanceResult<NaiveDate> {
    if let Some(date) = date {
        return parse_date(date);
    }
    if let Some(month) = month {
        return Ok(parse_month(month)?.start_date());
    }
    Ok(Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_date() {
        assert_eq!(
            reference_date(Some("2024-03"), None).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(
            reference_date(Some("2024-03"), Some("2024-05-20")).unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
        );
        assert!(reference_date(Some("2024-13"), None).unwrap_err().is_validation());
        assert!(reference_date(None, Some("20/05/2024")).is_err());
    }
}
