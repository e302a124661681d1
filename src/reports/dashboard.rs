//! Dashboard Report
//!
//! Everything shown on the dashboard for one reference date: the current
//! financial week, the current month split into its weeks, top expense
//! categories, predicted vs actual totals and the monthly history.

use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::config::settings::{FinancialWeekConfig, Settings};
use crate::display::{
    double_separator, format_bar, format_pending_banner, format_percentage,
    format_predicted_vs_actual, format_summary, separator, truncate,
};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{FinancialWeek, Month, Transaction};
use crate::services::PeriodService;

use super::category::{CategoryBreakdown, CategorySummary};
use super::history::MonthlyHistory;
use super::summary::{PendingSummary, PeriodSummary, PredictedVsActual};

/// One financial week with its totals and transactions
#[derive(Debug, Clone, Serialize)]
pub struct WeekReport {
    pub range: FinancialWeek,
    pub summary: PeriodSummary,
    pub transactions: Vec<Transaction>,
}

impl WeekReport {
    fn build(range: FinancialWeek, transactions: &[Transaction]) -> Self {
        let transactions: Vec<Transaction> = transactions
            .iter()
            .filter(|t| range.contains(t.date))
            .cloned()
            .collect();

        Self {
            range,
            summary: PeriodSummary::from_transactions(&transactions),
            transactions,
        }
    }
}

/// The reference month with a per-week breakdown
#[derive(Debug, Clone, Serialize)]
pub struct MonthReport {
    pub month: Month,
    pub summary: PeriodSummary,
    pub weeks: Vec<WeekReport>,
}

/// Dashboard Report
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub reference_date: NaiveDate,
    pub week_config: FinancialWeekConfig,
    pub current_week: WeekReport,
    pub current_month: MonthReport,
    /// Largest expense categories of the month
    pub top_categories: Vec<CategorySummary>,
    /// Status split for the month
    pub predicted_vs_actual: PredictedVsActual,
    /// Pending transactions of the month
    pub pending: PendingSummary,
    pub history: MonthlyHistory,
    #[serde(skip)]
    currency_symbol: String,
}

impl DashboardReport {
    /// Generate the dashboard for `reference_date`
    pub fn generate(
        transactions: &[Transaction],
        reference_date: NaiveDate,
        settings: &Settings,
        include_history: bool,
    ) -> Self {
        let periods = PeriodService::new(settings.week);
        let month = periods.month_of(reference_date);
        let week_range = periods.week_containing(reference_date);

        debug!(
            transactions = transactions.len(),
            week = %week_range,
            mode = %settings.week.mode,
            start_day = settings.week.start_day,
            "generating dashboard"
        );

        let month_range = month.range();
        let month_transactions: Vec<Transaction> = transactions
            .iter()
            .filter(|t| month_range.contains(t.date))
            .cloned()
            .collect();

        let current_week = WeekReport::build(week_range, transactions);
        debug!(
            week_transactions = current_week.transactions.len(),
            month_transactions = month_transactions.len(),
            "filtered current period"
        );

        let weeks = periods
            .weeks_of_month(reference_date)
            .into_iter()
            .map(|range| WeekReport::build(range, &month_transactions))
            .collect();

        let history = if include_history {
            MonthlyHistory::build(transactions, month, settings.history_months)
        } else {
            MonthlyHistory::default()
        };

        Self {
            reference_date,
            week_config: settings.week,
            current_week,
            current_month: MonthReport {
                month,
                summary: PeriodSummary::from_transactions(&month_transactions),
                weeks,
            },
            top_categories: CategoryBreakdown::top(&month_transactions, settings.top_categories),
            predicted_vs_actual: PredictedVsActual::from_transactions(&month_transactions),
            pending: PendingSummary::from_transactions(&month_transactions),
            history,
            currency_symbol: settings.currency_symbol.clone(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let symbol = self.currency_symbol.as_str();
        let mut output = String::new();

        output.push_str(&format!(
            "Dashboard - {} (weeks: {})\n",
            self.reference_date.format("%Y-%m-%d"),
            self.week_config.mode
        ));
        output.push_str(&double_separator(72));
        output.push('\n');

        if let Some(banner) = format_pending_banner(&self.pending, symbol) {
            output.push_str(&format!("! {}\n\n", banner));
        }

        output.push_str(&format!("Current week: {}\n", self.current_week.range));
        output.push_str(&format_summary(&self.current_week.summary, symbol));
        output.push_str(&format!(
            "  Transactions: {}\n\n",
            self.current_week.transactions.len()
        ));

        output.push_str(&format!("Month: {}\n", self.current_month.month));
        output.push_str(&format_summary(&self.current_month.summary, symbol));
        output.push('\n');

        output.push_str(&self.format_weeks());
        output.push('\n');

        output.push_str("Predicted vs actual\n");
        output.push_str(&format_predicted_vs_actual(&self.predicted_vs_actual, symbol));
        output.push('\n');

        output.push_str(&self.format_categories());

        if !self.history.is_empty() {
            output.push('\n');
            output.push_str(&self.format_history());
        }

        output
    }

    /// Week-by-week table of the current month
    pub fn format_weeks(&self) -> String {
        let symbol = self.currency_symbol.as_str();
        let mut output = String::new();

        output.push_str(&format!(
            "{:<24} {:>14} {:>14} {:>14} {:>5}\n",
            "Week", "Income", "Expense", "Balance", "Txns"
        ));
        output.push_str(&separator(75));
        output.push('\n');

        for week in &self.current_month.weeks {
            let marker = if week.range == self.current_week.range {
                " *"
            } else {
                ""
            };
            output.push_str(&format!(
                "{:<24} {:>14} {:>14} {:>14} {:>5}{}\n",
                week.range.to_string(),
                week.summary.total_income.format_with_symbol(symbol),
                week.summary.total_expense.format_with_symbol(symbol),
                week.summary.balance.format_with_symbol(symbol),
                week.transactions.len(),
                marker
            ));
        }

        output
    }

    /// Top expense categories with bars
    pub fn format_categories(&self) -> String {
        let symbol = self.currency_symbol.as_str();
        let mut output = String::from("Top expense categories\n");

        if self.top_categories.is_empty() {
            output.push_str("  No expenses this month.\n");
            return output;
        }

        let max = self
            .top_categories
            .first()
            .map(|c| c.total.as_f64())
            .unwrap_or_default();

        for category in &self.top_categories {
            output.push_str(&format!(
                "  {:<16} {:>14} {:>6} {}\n",
                truncate(category.category.label(), 16),
                category.total.format_with_symbol(symbol),
                format_percentage(category.percentage),
                format_bar(category.total.as_f64(), max, 20)
            ));
        }

        output
    }

    /// Monthly history with accumulated wealth
    pub fn format_history(&self) -> String {
        let symbol = self.currency_symbol.as_str();
        let mut output = String::new();

        output.push_str(&format!(
            "{:<8} {:>14} {:>14} {:>14} {:>14}\n",
            "Month", "Income", "Expense", "Balance", "Accumulated"
        ));
        output.push_str(&separator(68));
        output.push('\n');

        for (month, wealth) in self
            .history
            .months
            .iter()
            .zip(&self.history.accumulated_wealth)
        {
            output.push_str(&format!(
                "{:<8} {:>14} {:>14} {:>14} {:>14}\n",
                month.label,
                month.income.format_with_symbol(symbol),
                month.expense.format_with_symbol(symbol),
                month.balance.format_with_symbol(symbol),
                wealth.accumulated.format_with_symbol(symbol)
            ));
        }

        output
    }

    /// Export the month's weekly breakdown to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> FinanceResult<()> {
        writeln!(
            writer,
            "Week Start,Week End,Income,Expense,Balance,Transaction Count"
        )
        .map_err(|e| FinanceError::Export(e.to_string()))?;

        for week in &self.current_month.weeks {
            writeln!(
                writer,
                "{},{},{},{},{},{}",
                week.range.start,
                week.range.end,
                week.summary.total_income,
                week.summary.total_expense,
                week.summary.balance,
                week.transactions.len()
            )
            .map_err(|e| FinanceError::Export(e.to_string()))?;
        }

        writeln!(
            writer,
            "{},{},{},{},{},{}",
            self.current_month.month.start_date(),
            self.current_month.month.end_date(),
            self.current_month.summary.total_income,
            self.current_month.summary.total_expense,
            self.current_month.summary.balance,
            self.current_month
                .weeks
                .iter()
                .map(|w| w.transactions.len())
                .sum::<usize>()
        )
        .map_err(|e| FinanceError::Export(e.to_string()))?;

        Ok(())
    }
}
