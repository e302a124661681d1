//! Storage layer for fintrack
//!
//! Provides the transaction sheet, atomic file writes and the audit log
//! behind a single coordinator.

pub mod file_io;
pub mod sheet;

pub use file_io::{write_atomic, write_json_atomic};
pub use sheet::SheetRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::FinancePaths;
use crate::error::FinanceResult;

/// Main storage coordinator
pub struct Storage {
    paths: FinancePaths,
    pub sheet: SheetRepository,
    pub audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: FinancePaths) -> FinanceResult<Self> {
        paths.ensure_directories()?;

        Ok(Self {
            sheet: SheetRepository::new(paths.sheet_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &FinancePaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&self) -> FinanceResult<()> {
        self.sheet.load()
    }

    /// Make sure the sheet exists with its header row
    pub fn initialize(&self) -> FinanceResult<bool> {
        self.sheet.initialize()
    }

    /// Check if storage has been initialized (settings have been written)
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    pub fn log_create<T: Serialize>(
        &self,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> FinanceResult<()> {
        self.audit
            .log(&AuditEntry::create(entity_id, entity_name, entity))
    }

    pub fn log_update<T: Serialize>(
        &self,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
    ) -> FinanceResult<()> {
        self.audit
            .log(&AuditEntry::update(entity_id, entity_name, before, after))
    }

    pub fn log_delete<T: Serialize>(
        &self,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> FinanceResult<()> {
        self.audit
            .log(&AuditEntry::delete(entity_id, entity_name, entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
        assert!(storage.initialize().unwrap());
        assert!(storage.paths().sheet_file().exists());
        storage.load_all().unwrap();
        assert_eq!(storage.sheet.count().unwrap(), 0);
    }

    #[test]
    fn test_audit_helpers_append_entries() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinancePaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let before = serde_json::json!({"amount": 100});
        let after = serde_json::json!({"amount": 200});
        storage.log_create("abc", None, &before).unwrap();
        storage
            .log_update("abc", Some("Rent".into()), &before, &after)
            .unwrap();
        storage.log_delete("abc", None, &after).unwrap();

        let entries = storage.audit.read_all().unwrap();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[1].operation, Operation::Update);
        assert_eq!(entries[2].operation, Operation::Delete);
    }
}
