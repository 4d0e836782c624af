//! `config.json`: how amounts are printed and whether edits are audited
//!
//! Every field is optional on disk; missing ones take their default.

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;

/// Current settings schema version
pub const SETTINGS_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub schema_version: u32,

    /// Prefix for amounts in `report` and `set` output
    pub currency_symbol: String,

    /// Record table edits in `audit.log`
    pub audit_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: SETTINGS_SCHEMA_VERSION,
            currency_symbol: "$".to_string(),
            audit_enabled: true,
        }
    }
}

impl Settings {
    /// Read `config.json`, or defaults when it does not exist yet
    ///
    /// Nothing is written here; `budget init` persists the file.
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let path = paths.settings_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)
            .map_err(|e| BudgetError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
        serde_json::from_str(&contents)
            .map_err(|e| BudgetError::Config(format!("Invalid {}: {}", path.display(), e)))
    }

    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;
        let path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;
        std::fs::write(&path, contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }
}
