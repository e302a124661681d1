//! Service layer for fintrack
//!
//! The service layer provides business logic on top of the storage layer:
//! validation, filtering and auditing of transactions, and the financial
//! week calendar.

pub mod period;
pub mod transaction;

pub use period::PeriodService;
pub use transaction::{
    paginate, CreateTransactionInput, Page, TransactionFilter, TransactionPatch,
    TransactionService,
};
