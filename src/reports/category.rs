//! Expense breakdown by category

use serde::Serialize;

use crate::models::{Category, Money, Transaction};

/// Spending in one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    pub category: Category,
    pub total: Money,
    /// Share of all expense categories in scope (0-100)
    pub percentage: f64,
    pub transaction_count: usize,
}

/// Expense categories, largest first
pub struct CategoryBreakdown;

impl CategoryBreakdown {
    /// Group expense transactions by category
    ///
    /// Income is ignored. Categories are sorted by total, largest first;
    /// equal totals keep the order in which the category first appeared.
    pub fn expenses(transactions: &[Transaction]) -> Vec<CategorySummary> {
        let mut groups: Vec<(Category, Money, usize)> = Vec::new();

        for txn in transactions.iter().filter(|t| t.is_expense()) {
            match groups.iter_mut().find(|(category, _, _)| *category == txn.category) {
                Some((_, total, count)) => {
                    *total += txn.amount;
                    *count += 1;
                }
                None => groups.push((txn.category, txn.amount, 1)),
            }
        }

        let grand_total: Money = groups.iter().map(|(_, total, _)| *total).sum();

        let mut summaries: Vec<CategorySummary> = groups
            .into_iter()
            .map(|(category, total, transaction_count)| CategorySummary {
                category,
                total,
                percentage: total.percent_of(grand_total),
                transaction_count,
            })
            .collect();

        summaries.sort_by(|a, b| b.total.cmp(&a.total));
        summaries
    }

    /// The `limit` largest expense categories
    pub fn top(transactions: &[Transaction], limit: usize) -> Vec<CategorySummary> {
        let mut summaries = Self::expenses(transactions);
        summaries.truncate(limit);
        summaries
    }
}
