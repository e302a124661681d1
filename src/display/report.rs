//! Report formatting utilities for terminal output
//!
//! Provides formatting helpers shared by the dashboard and the reports.

use crate::models::Money;
use crate::reports::{PendingSummary, PeriodSummary, PredictedVsActual};

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

/// Income / expense / balance block
pub fn format_summary(summary: &PeriodSummary, symbol: &str) -> String {
    format!(
        "  Income:  {:>16}\n  Expense: {:>16}\n  Balance: {:>16}\n",
        summary.total_income.format_with_symbol(symbol),
        summary.total_expense.format_with_symbol(symbol),
        summary.balance.format_with_symbol(symbol)
    )
}

/// Predicted vs actual card
pub fn format_predicted_vs_actual(split: &PredictedVsActual, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "  {:<10} {:>16} {:>16} {:>16}\n",
        "", "Predicted", "Actual", "Pending"
    ));

    let rows = [
        (
            "Income",
            split.predicted.total_income,
            split.actual.total_income,
            split.pending.total_income,
        ),
        (
            "Expense",
            split.predicted.total_expense,
            split.actual.total_expense,
            split.pending.total_expense,
        ),
        (
            "Balance",
            split.predicted.balance,
            split.actual.balance,
            split.pending.balance,
        ),
    ];

    for (label, predicted, actual, pending) in rows {
        output.push_str(&format!(
            "  {:<10} {:>16} {:>16} {:>16}\n",
            label,
            predicted.format_with_symbol(symbol),
            actual.format_with_symbol(symbol),
            pending.format_with_symbol(symbol)
        ));
    }

    output
}

/// Banner line for outstanding pending transactions, if any
pub fn format_pending_banner(pending: &PendingSummary, symbol: &str) -> Option<String> {
    if pending.is_empty() {
        return None;
    }

    let noun = if pending.count == 1 {
        "transaction"
    } else {
        "transactions"
    };
    Some(format!(
        "You have {} pending {} (income {}, expense {})",
        pending.count,
        noun,
        pending.income.format_with_symbol(symbol),
        pending.expense.format_with_symbol(symbol)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(7.26), "7.3%");
        assert_eq!(format_percentage(42.6), "43%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(5.0, 10.0, 4), "██░░");
        assert_eq!(format_bar(0.0, 10.0, 3), "   ");
        assert_eq!(format_bar(20.0, 10.0, 2), "██");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("Alimentação", 20), "Alimentação");
        assert_eq!(truncate("Alimentação", 8), "Alime...");
        assert_eq!(truncate("abc", 2), "..");
    }

    #[test]
    fn test_pending_banner() {
        assert!(format_pending_banner(&PendingSummary::default(), "R$").is_none());

        let pending = PendingSummary {
            count: 2,
            income: Money::zero(),
            expense: Money::from_cents(20000),
        };
        let banner = format_pending_banner(&pending, "R$").unwrap();
        assert!(banner.starts_with("You have 2 pending transactions"));
        assert!(banner.contains("R$ 200.00"));
    }
}
