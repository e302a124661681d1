//! Transaction model
//!
//! Represents an income or expense entry with a payment status. Amounts are
//! always positive; the direction comes from the transaction type.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => f.pad("Income"),
            Self::Expense => f.pad("Expense"),
        }
    }
}

impl FromStr for TransactionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "in" | "receita" => Ok(Self::Income),
            "expense" | "out" | "despesa" => Ok(Self::Expense),
            other => Err(format!("Unknown transaction type: {}", other)),
        }
    }
}

/// Payment status of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    /// Money has actually moved
    #[default]
    Paid,
    /// Scheduled or expected, not yet settled
    Pending,
}

impl PaymentStatus {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Paid => "PAID",
            Self::Pending => "PENDING",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paid => f.pad("Paid"),
            Self::Pending => f.pad("Pending"),
        }
    }
}

impl FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "paid" | "pago" => Ok(Self::Paid),
            "pending" | "pendente" => Ok(Self::Pending),
            other => Err(format!("Unknown payment status: {}", other)),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Free-text description
    pub description: String,

    /// Amount (always positive)
    pub amount: Money,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionType,

    pub category: Category,

    /// Transaction date
    pub date: NaiveDate,

    #[serde(default)]
    pub status: PaymentStatus,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,

    /// When the transaction was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new transaction with a fresh id and timestamps
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        kind: TransactionType,
        category: Category,
        date: NaiveDate,
        status: PaymentStatus,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            description: description.into(),
            amount,
            kind,
            category,
            date,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    pub fn is_paid(&self) -> bool {
        self.status == PaymentStatus::Paid
    }

    pub fn is_pending(&self) -> bool {
        self.status == PaymentStatus::Pending
    }

    /// Amount with sign applied (income positive, expense negative)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    /// Mark the transaction as modified now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if !self.category.allows(self.kind) {
            return Err(TransactionValidationError::CategoryMismatch {
                category: self.category,
                kind: self.kind,
            });
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}{}",
            self.date.format("%Y-%m-%d"),
            self.description,
            if self.is_expense() { "-" } else { "+" },
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyDescription,
    NonPositiveAmount(Money),
    CategoryMismatch {
        category: Category,
        kind: TransactionType,
    },
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero, got {}", amount)
            }
            Self::CategoryMismatch { category, kind } => write!(
                f,
                "Category '{}' is not valid for {} transactions",
                category.code(),
                kind.code()
            ),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(
            "Rent",
            Money::from_cents(150000),
            TransactionType::Expense,
            Category::Moradia,
            date(5),
            PaymentStatus::Pending,
        );
        assert!(txn.is_expense());
        assert!(txn.is_pending());
        assert_eq!(txn.created_at, txn.updated_at);
        assert_eq!(txn.signed_amount().cents(), -150000);
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_validate_amount() {
        let txn = Transaction::new(
            "Zero",
            Money::zero(),
            TransactionType::Income,
            Category::Salario,
            date(1),
            PaymentStatus::Paid,
        );
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::NonPositiveAmount(_))
        ));
    }

    #[test]
    fn test_validate_category_mismatch() {
        let txn = Transaction::new(
            "Salary",
            Money::from_cents(100),
            TransactionType::Expense,
            Category::Salario,
            date(1),
            PaymentStatus::Paid,
        );
        let err = txn.validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Category 'SALARIO' is not valid for EXPENSE transactions"
        );
    }

    #[test]
    fn test_validate_description() {
        let txn = Transaction::new(
            "   ",
            Money::from_cents(100),
            TransactionType::Income,
            Category::Freelance,
            date(1),
            PaymentStatus::Paid,
        );
        assert_eq!(
            txn.validate(),
            Err(TransactionValidationError::EmptyDescription)
        );
    }

    #[test]
    fn test_parse_type_and_status() {
        assert_eq!("INCOME".parse::<TransactionType>().unwrap(), TransactionType::Income);
        assert_eq!("despesa".parse::<TransactionType>().unwrap(), TransactionType::Expense);
        assert_eq!("pending".parse::<PaymentStatus>().unwrap(), PaymentStatus::Pending);
        assert!("maybe".parse::<PaymentStatus>().is_err());
    }

    #[test]
    fn test_serde_field_names() {
        let txn = Transaction::new(
            "Salary",
            Money::from_cents(100000),
            TransactionType::Income,
            Category::Salario,
            date(5),
            PaymentStatus::Paid,
        );
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["type"], "INCOME");
        assert_eq!(json["status"], "PAID");
        assert_eq!(json["category"], "SALARIO");
        assert_eq!(json["date"], "2024-01-05");
    }
}
