//! Monthly history and accumulated wealth
//!
//! One summary per trailing month ending at the reference month, plus the
//! running sum of monthly balances.

use serde::Serialize;

use crate::config::settings::MAX_HISTORY_MONTHS;
use crate::models::{Money, Month, Transaction};

use super::summary::PeriodSummary;

/// Totals for one month of the history window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyHistoryData {
    pub month: Month,
    /// Short label (e.g., "Jan/24")
    pub label: String,
    pub income: Money,
    pub expense: Money,
    pub balance: Money,
}

/// Running total of balances up to and including a month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccumulatedWealthData {
    pub month: Month,
    pub label: String,
    pub accumulated: Money,
}

/// History over a window of months, oldest first
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct MonthlyHistory {
    pub months: Vec<MonthlyHistoryData>,
    pub accumulated_wealth: Vec<AccumulatedWealthData>,
}

impl MonthlyHistory {
    /// Build the history for `months` months ending at `reference`
    ///
    /// The window is capped at `MAX_HISTORY_MONTHS` and at the first
    /// representable month. Accumulated wealth starts from zero at the
    /// oldest month of the window; earlier balances are not carried in.
    pub fn build(transactions: &[Transaction], reference: Month, months: u32) -> Self {
        let mut history = Self::default();
        let months = months.min(MAX_HISTORY_MONTHS);
        if months == 0 {
            return history;
        }

        let oldest = reference
            .minus(months - 1)
            .unwrap_or_else(|| Month::of(chrono::NaiveDate::MIN));
        let mut accumulated = Money::zero();
        let mut cursor = Some(oldest);

        while let Some(month) = cursor.filter(|m| *m <= reference) {
            let summary = PeriodSummary::within(transactions, month.range());
            let label = month.label();

            accumulated += summary.balance;

            history.months.push(MonthlyHistoryData {
                month,
                label: label.clone(),
                income: summary.total_income,
                expense: summary.total_expense,
                balance: summary.balance,
            });
            history.accumulated_wealth.push(AccumulatedWealthData {
                month,
                label,
                accumulated,
            });

            cursor = month.next();
        }

        history
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Accumulated wealth at the end of the window
    pub fn final_wealth(&self) -> Money {
        self.accumulated_wealth
            .last()
            .map(|w| w.accumulated)
            .unwrap_or_default()
    }
}
