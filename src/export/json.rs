//! JSON export
//!
//! The workbook together with every aggregate row, stamped with the export
//! time and application version.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::reports::BudgetSummary;
use crate::services::BudgetModel;
use crate::storage::Workbook;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export document
#[derive(Debug, Clone, Serialize)]
pub struct BudgetExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub app_version: String,
    pub workbook: Workbook,
    pub summary: BudgetSummary,
}

impl BudgetExport {
    pub fn from_model(model: &BudgetModel) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            workbook: Workbook::from_model(model),
            summary: BudgetSummary::generate(model),
        }
    }
}

/// Export the model and its aggregates as pretty-printed JSON
pub fn export_json<W: Write>(model: &BudgetModel, writer: &mut W) -> BudgetResult<()> {
    let export = BudgetExport::from_model(model);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}
