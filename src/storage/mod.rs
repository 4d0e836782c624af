//! Storage layer for budget-builder
//!
//! Persists the budget model as a JSON workbook with atomic writes and
//! records table edits in the audit log.

pub mod file_io;
pub mod workbook;

pub use file_io::{read_json, write_json_atomic};
pub use workbook::{Workbook, WORKBOOK_SCHEMA_VERSION};

use serde::Serialize;
use tracing::{debug, warn};

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::BudgetPaths;
use crate::error::{BudgetError, BudgetResult};
use crate::services::BudgetModel;

/// Main storage coordinator: workbook file plus audit log
pub struct Storage {
    paths: BudgetPaths,
    audit: AuditLogger,
    audit_enabled: bool,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: BudgetPaths) -> Result<Self, BudgetError> {
        paths.ensure_directories()?;

        Ok(Self {
            audit: AuditLogger::new(paths.audit_log()),
            audit_enabled: true,
            paths,
        })
    }

    /// Turn audit logging on or off
    pub fn with_audit(mut self, enabled: bool) -> Self {
        self.audit_enabled = enabled;
        self
    }

    pub fn paths(&self) -> &BudgetPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Check if a workbook has been written
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    /// Load the budget model, falling back to the seed table when no
    /// workbook exists yet
    pub fn load_model(&self) -> BudgetResult<BudgetModel> {
        let path = self.paths.workbook_file();
        match read_json::<Workbook, _>(&path)? {
            Some(workbook) => {
                debug!(path = %path.display(), "loaded workbook");
                workbook.into_model()
            }
            None => {
                debug!(path = %path.display(), "no workbook yet; using seed budget");
                Ok(BudgetModel::seed())
            }
        }
    }

    /// Save the budget model atomically
    pub fn save_model(&self, model: &BudgetModel) -> BudgetResult<()> {
        model.validate()?;
        write_json_atomic(self.paths.workbook_file(), &Workbook::from_model(model))
    }

    // Audit appends run after the workbook is saved. A failed append is
    // reported with `warn!` so the saved edit is not reported as failed.

    /// Record a create in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.log(AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an update in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) {
        self.log(AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        ))
    }

    /// Record a delete in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        self.log(AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }

    fn log(&self, entry: AuditEntry) {
        if !self.audit_enabled {
            return;
        }
        if let Err(e) = self.audit.log(&entry) {
            warn!(
                error = %e,
                entity_type = %entry.entity_type,
                entity_id = %entry.entity_id,
                "failed to append audit entry"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::services::GroupRef;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_storage_creation() {
        let (temp_dir, storage) = create_test_storage();
        assert!(temp_dir.path().join("data").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_load_without_workbook_is_seed() {
        let (_temp_dir, storage) = create_test_storage();
        assert_eq!(storage.load_model().unwrap(), BudgetModel::seed());
    }

    #[test]
    fn test_save_and_reload() {
        let (_temp_dir, storage) = create_test_storage();

        let mut model = BudgetModel::seed();
        model.append_month_range(Some("2024-03"), Some("2024-04"));
        model.add_category_group(1).unwrap();
        model
            .set_value(GroupRef::new(0, 0).leaf(0), 3, Money::from_cents(1234))
            .unwrap();

        storage.save_model(&model).unwrap();
        assert!(storage.is_initialized());

        let loaded = storage.load_model().unwrap();
        assert_eq!(loaded, model);
    }

    #[test]
    fn test_misaligned_workbook_is_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let json = r#"{
            "schema_version": 1,
            "months": ["January 2024", "February 2024"],
            "sections": [{
                "parent_category_name": "Main Income",
                "groups": [{"category": "Income", "subcategories": [
                    {"name": "Sales", "values": [100]}
                ]}]
            }]
        }"#;
        std::fs::write(storage.paths().workbook_file(), json).unwrap();

        let err = storage.load_model().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_audit_can_be_disabled() {
        let (_temp_dir, storage) = create_test_storage();
        let storage = storage.with_audit(false);
        storage.log_create(EntityType::CategoryGroup, "1/2", None, &"x");
        assert_eq!(storage.audit().entry_count().unwrap(), 0);

        let storage = storage.with_audit(true);
        storage.log_create(EntityType::CategoryGroup, "1/2", None, &"x");
        assert_eq!(storage.audit().entry_count().unwrap(), 1);
    }

    #[test]
    fn test_audit_failure_does_not_undo_save() {
        let (_temp_dir, storage) = create_test_storage();
        // A directory where the log file should be makes every append fail.
        std::fs::create_dir(storage.paths().audit_log()).unwrap();

        let mut model = BudgetModel::seed();
        model.add_category_group(0).unwrap();
        storage.save_model(&model).unwrap();
        storage.log_create(EntityType::CategoryGroup, "0/2", None, &model.sections()[0].groups[2]);

        assert_eq!(storage.load_model().unwrap(), model);
    }
}
