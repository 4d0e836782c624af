//! Export module for budget-builder
//!
//! Writes the budget table in three formats:
//! - CSV: one row per subcategory, one column per month (spreadsheet-compatible)
//! - JSON: the workbook plus all aggregate rows
//! - YAML: the same document as JSON, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_csv;
pub use self::json::{export_json, BudgetExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_yaml;
