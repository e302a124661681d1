//! Core data models for fintrack
//!
//! This module contains the data structures of the finance domain:
//! transactions, categories, money and calendar periods.

pub mod category;
pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use category::Category;
pub use ids::TransactionId;
pub use money::Money;
pub use period::{DateRange, FinancialWeek, Month};
pub use transaction::{PaymentStatus, Transaction, TransactionType};
