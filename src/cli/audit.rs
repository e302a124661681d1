//! CLI command for viewing the audit log

use crate::error::FinanceResult;
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first
pub fn handle_audit_command(storage: &Storage, limit: usize) -> FinanceResult<()> {
    let entries = storage.audit.read_recent(limit)?;

    if entries.is_empty() {
        println!("No audit entries.");
        return Ok(());
    }

    println!("Audit log ({} most recent)", entries.len());
    for entry in &entries {
        println!("  {}", entry.summary());
    }

    Ok(())
}
