//! Transaction service
//!
//! Provides business logic for transaction management: filtered listing,
//! CRUD operations with validation and auditing, and pagination.

use chrono::NaiveDate;
use tracing::info;

use crate::error::{FinanceError, FinanceResult};
use crate::models::{Category, Money, PaymentStatus, Transaction, TransactionId, TransactionType};
use crate::storage::Storage;

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Filter by date range start (inclusive)
    pub start_date: Option<NaiveDate>,
    /// Filter by date range end (inclusive)
    pub end_date: Option<NaiveDate>,
    pub kind: Option<TransactionType>,
    pub category: Option<Category>,
    pub status: Option<PaymentStatus>,
    /// Case-insensitive text matched against description, id and amount
    pub search: Option<String>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by date range
    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn since(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn until(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn status(mut self, status: PaymentStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// Check whether a transaction passes every configured filter
    pub fn matches(&self, txn: &Transaction) -> bool {
        if self.start_date.is_some_and(|start| txn.date < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| txn.date > end) {
            return false;
        }
        if self.kind.is_some_and(|kind| txn.kind != kind) {
            return false;
        }
        if self.category.is_some_and(|category| txn.category != category) {
            return false;
        }
        if self.status.is_some_and(|status| txn.status != status) {
            return false;
        }

        match self.search.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => {
                let needle = text.to_lowercase();
                txn.description.to_lowercase().contains(&needle)
                    || txn.id.as_str().to_lowercase().contains(&needle)
                    || txn.amount.to_string().contains(&needle)
            }
            _ => true,
        }
    }
}

/// Input for creating a new transaction
#[derive(Debug, Clone)]
pub struct CreateTransactionInput {
    pub description: String,
    pub amount: Money,
    pub kind: TransactionType,
    pub category: Category,
    pub date: NaiveDate,
    pub status: PaymentStatus,
}

/// Partial update of a transaction; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct TransactionPatch {
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub kind: Option<TransactionType>,
    pub category: Option<Category>,
    pub date: Option<NaiveDate>,
    pub status: Option<PaymentStatus>,
}

impl TransactionPatch {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.amount.is_none()
            && self.kind.is_none()
            && self.category.is_none()
            && self.date.is_none()
            && self.status.is_none()
    }
}

/// One page of a larger result set
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total: usize,
    /// 1-based page number
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Slice `items` into the requested 1-based page
///
/// Page numbers below 1 are treated as 1; a page past the end is empty.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let page = page.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(page_size);

    let items = items
        .into_iter()
        .skip((page - 1).saturating_mul(page_size))
        .take(page_size)
        .collect();

    Page {
        items,
        total,
        page,
        page_size,
        total_pages,
    }
}

fn audit_name(txn: &Transaction) -> Option<String> {
    Some(format!("{} {}", txn.date, txn.description))
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// List transactions matching a filter, newest first
    ///
    /// Transactions sharing a date keep their sheet order.
    pub fn list(&self, filter: &TransactionFilter) -> FinanceResult<Vec<Transaction>> {
        let mut transactions: Vec<Transaction> = self
            .storage
            .sheet
            .find_all()?
            .into_iter()
            .filter(|t| filter.matches(t))
            .collect();

        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(transactions)
    }

    /// All transactions in sheet order
    pub fn all(&self) -> FinanceResult<Vec<Transaction>> {
        self.storage.sheet.find_all()
    }

    pub fn get(&self, id: &TransactionId) -> FinanceResult<Option<Transaction>> {
        self.storage.sheet.find_by_id(id)
    }

    /// Find a transaction by full id or unique id prefix
    pub fn find(&self, identifier: &str) -> FinanceResult<Transaction> {
        let identifier = identifier.trim();
        if let Ok(id) = identifier.parse::<TransactionId>() {
            if let Some(txn) = self.get(&id)? {
                return Ok(txn);
            }
        }

        let mut matches: Vec<Transaction> = self
            .storage
            .sheet
            .find_all()?
            .into_iter()
            .filter(|t| !identifier.is_empty() && t.id.as_str().starts_with(identifier))
            .collect();

        match matches.len() {
            0 => Err(FinanceError::transaction_not_found(identifier)),
            1 => Ok(matches.remove(0)),
            n => Err(FinanceError::Validation(format!(
                "Identifier '{}' is ambiguous: matches {} transactions",
                identifier, n
            ))),
        }
    }

    /// Create a new transaction
    pub fn create(&self, input: CreateTransactionInput) -> FinanceResult<Transaction> {
        let txn = Transaction::new(
            input.description.trim(),
            input.amount,
            input.kind,
            input.category,
            input.date,
            input.status,
        );

        txn.validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        self.storage.sheet.append(txn.clone())?;
        self.storage
            .log_create(txn.id.as_str(), audit_name(&txn), &txn)?;

        info!(id = %txn.id, amount = %txn.amount, kind = txn.kind.code(), "created transaction");
        Ok(txn)
    }

    /// Apply a partial update to a transaction
    pub fn update(
        &self,
        id: &TransactionId,
        patch: TransactionPatch,
    ) -> FinanceResult<Transaction> {
        let before = self
            .get(id)?
            .ok_or_else(|| FinanceError::transaction_not_found(id.as_str()))?;

        let mut txn = before.clone();
        if let Some(description) = patch.description {
            txn.description = description.trim().to_string();
        }
        if let Some(amount) = patch.amount {
            txn.amount = amount;
        }
        if let Some(kind) = patch.kind {
            txn.kind = kind;
        }
        if let Some(category) = patch.category {
            txn.category = category;
        }
        if let Some(date) = patch.date {
            txn.date = date;
        }
        if let Some(status) = patch.status {
            txn.status = status;
        }
        txn.touch();

        txn.validate()
            .map_err(|e| FinanceError::Validation(e.to_string()))?;

        if !self.storage.sheet.update(txn.clone())? {
            return Err(FinanceError::transaction_not_found(id.as_str()));
        }
        self.storage
            .log_update(txn.id.as_str(), audit_name(&txn), &before, &txn)?;

        info!(id = %txn.id, "updated transaction");
        Ok(txn)
    }

    /// Delete a transaction, returning the removed row
    pub fn delete(&self, id: &TransactionId) -> FinanceResult<Transaction> {
        let txn = self
            .get(id)?
            .ok_or_else(|| FinanceError::transaction_not_found(id.as_str()))?;

        if !self.storage.sheet.delete(id)? {
            return Err(FinanceError::transaction_not_found(id.as_str()));
        }
        self.storage
            .log_delete(txn.id.as_str(), audit_name(&txn), &txn)?;

        info!(id = %txn.id, "deleted transaction");
        Ok(txn)
    }

    pub fn count(&self) -> FinanceResult<usize> {
        self.storage.sheet.count()
    }
}
