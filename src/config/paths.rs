//! Where budget-builder keeps its files
//!
//! ```text
//! <base>/config.json        settings
//! <base>/audit.log          JSONL edit history
//! <base>/data/budget.json   the workbook
//! ```
//!
//! `<base>` is `BUDGET_BUILDER_DATA_DIR` when set, otherwise
//! `$XDG_CONFIG_HOME/budget-builder`, `~/.config/budget-builder`, or
//! `%APPDATA%\budget-builder` on Windows.

use std::path::{Path, PathBuf};

use crate::error::BudgetError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "BUDGET_BUILDER_DATA_DIR";

/// File locations derived from one base directory
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    base_dir: PathBuf,
}

impl BudgetPaths {
    /// Resolve the base directory from `BUDGET_BUILDER_DATA_DIR` or the
    /// platform config directory
    pub fn new() -> Result<Self, BudgetError> {
        Self::resolve(std::env::var(DATA_DIR_ENV).ok().as_deref())
    }

    /// Resolve from an explicit override; blank counts as unset
    pub fn resolve(override_dir: Option<&str>) -> Result<Self, BudgetError> {
        let base_dir = match override_dir.map(str::trim) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => resolve_default_path()?,
        };
        Ok(Self { base_dir })
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// `config.json`
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// `data/budget.json`: month columns and the budget tree
    pub fn workbook_file(&self) -> PathBuf {
        self.data_dir().join("budget.json")
    }

    /// Create the base and data directories
    pub fn ensure_directories(&self) -> Result<(), BudgetError> {
        for dir in [self.base_dir.clone(), self.data_dir()] {
            std::fs::create_dir_all(&dir).map_err(|e| {
                BudgetError::Io(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }
        Ok(())
    }

    /// Whether a workbook has been written
    pub fn is_initialized(&self) -> bool {
        self.workbook_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                BudgetError::Config("Could not determine home directory (HOME not set)".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("budget-builder"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, BudgetError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| BudgetError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("budget-builder"))
}
