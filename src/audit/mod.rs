//! Audit logging for fintrack
//!
//! Records every create, update and delete of a transaction row with
//! before/after snapshots in an append-only JSONL file (`audit.log`).
//!
//! Diagnostic logging goes through `tracing`; this log is the durable
//! change history of the sheet.

mod entry;
mod logger;

pub use entry::{describe_changes, AuditEntry, Operation};
pub use logger::AuditLogger;
