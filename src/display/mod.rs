//! Display formatting for terminal output
//!
//! Provides utilities for formatting transactions and report data for
//! terminal display.

pub mod report;
pub mod transaction;

pub use report::{
    double_separator, format_bar, format_pending_banner, format_percentage,
    format_predicted_vs_actual, format_summary, separator, truncate,
};
pub use transaction::{
    format_transaction_details, format_transaction_page, format_transaction_table,
};
