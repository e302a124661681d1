//! Income/expense totals
//!
//! Period summaries, the predicted-vs-actual split by payment status and
//! the pending-transactions summary.

use serde::Serialize;

use crate::models::{DateRange, Money, PaymentStatus, Transaction};

/// Income, expense and balance over a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PeriodSummary {
    pub total_income: Money,
    pub total_expense: Money,
    /// Income minus expense
    pub balance: Money,
}

impl PeriodSummary {
    /// Sum every transaction regardless of status
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut total_income = Money::zero();
        let mut total_expense = Money::zero();

        for txn in transactions {
            if txn.is_income() {
                total_income += txn.amount;
            } else {
                total_expense += txn.amount;
            }
        }

        Self {
            total_income,
            total_expense,
            balance: total_income - total_expense,
        }
    }

    /// Sum the transactions dated inside `range`
    pub fn within(transactions: &[Transaction], range: DateRange) -> Self {
        Self::from_transactions(transactions.iter().filter(|t| range.contains(t.date)))
    }
}

/// Totals split by payment status
///
/// `predicted` counts every transaction, `actual` only paid ones and
/// `pending` only pending ones, so `predicted = actual + pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PredictedVsActual {
    pub predicted: PeriodSummary,
    pub actual: PeriodSummary,
    pub pending: PeriodSummary,
}

impl PredictedVsActual {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        Self {
            predicted: PeriodSummary::from_transactions(transactions),
            actual: PeriodSummary::from_transactions(
                transactions.iter().filter(|t| t.status == PaymentStatus::Paid),
            ),
            pending: PeriodSummary::from_transactions(
                transactions.iter().filter(|t| t.status == PaymentStatus::Pending),
            ),
        }
    }

    pub fn within(transactions: &[Transaction], range: DateRange) -> Self {
        let scoped: Vec<Transaction> = transactions
            .iter()
            .filter(|t| range.contains(t.date))
            .cloned()
            .collect();
        Self::from_transactions(&scoped)
    }
}

/// Outstanding pending transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PendingSummary {
    pub count: usize,
    pub income: Money,
    pub expense: Money,
}

impl PendingSummary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        transactions
            .iter()
            .filter(|t| t.is_pending())
            .fold(Self::default(), |mut acc, txn| {
                acc.count += 1;
                if txn.is_income() {
                    acc.income += txn.amount;
                } else {
                    acc.expense += txn.amount;
                }
                acc
            })
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, TransactionType};
    use chrono::NaiveDate;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn txn(
        cents: i64,
        kind: TransactionType,
        status: PaymentStatus,
        date: NaiveDate,
    ) -> Transaction {
        let category = match kind {
            TransactionType::Income => Category::Salario,
            TransactionType::Expense => Category::Alimentacao,
        };
        Transaction::new("test", Money::from_cents(cents), kind, category, date, status)
    }

    fn january_sample() -> Vec<Transaction> {
        vec![
            txn(100000, TransactionType::Income, PaymentStatus::Paid, ymd(2024, 1, 5)),
            txn(30000, TransactionType::Expense, PaymentStatus::Paid, ymd(2024, 1, 6)),
            txn(20000, TransactionType::Expense, PaymentStatus::Pending, ymd(2024, 1, 10)),
        ]
    }

    #[test]
    fn test_period_summary() {
        let summary = PeriodSummary::from_transactions(&january_sample());
        assert_eq!(summary.total_income.cents(), 100000);
        assert_eq!(summary.total_expense.cents(), 50000);
        assert_eq!(summary.balance.cents(), 50000);
    }

    #[test]
    fn test_empty_summary_is_zero() {
        let summary = PeriodSummary::from_transactions(std::iter::empty());
        assert_eq!(summary, PeriodSummary::default());
        assert!(summary.balance.is_zero());
    }

    #[test]
    fn test_within_range() {
        let range = DateRange::new(ymd(2024, 1, 6), ymd(2024, 1, 10));
        let summary = PeriodSummary::within(&january_sample(), range);
        assert!(summary.total_income.is_zero());
        assert_eq!(summary.total_expense.cents(), 50000);
        assert_eq!(summary.balance.cents(), -50000);
    }

    #[test]
    fn test_predicted_vs_actual() {
        let split = PredictedVsActual::from_transactions(&january_sample());

        assert_eq!(split.actual.balance.cents(), 70000);
        assert_eq!(split.predicted.balance.cents(), 50000);
        assert_eq!(split.pending.total_expense.cents(), 20000);
        assert!(split.pending.total_income.is_zero());
        assert_eq!(
            split.predicted.total_expense,
            split.actual.total_expense + split.pending.total_expense
        );
    }

    #[test]
    fn test_pending_summary() {
        let pending = PendingSummary::from_transactions(&january_sample());
        assert_eq!(pending.count, 1);
        assert_eq!(pending.expense.cents(), 20000);
        assert!(pending.income.is_zero());
        assert!(PendingSummary::from_transactions(&[]).is_empty());
    }
}
