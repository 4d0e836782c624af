//! YAML export

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::export::json::BudgetExport;
use crate::services::BudgetModel;

/// Export the same document as JSON, in YAML with a comment header
pub fn export_yaml<W: Write>(model: &BudgetModel, writer: &mut W) -> BudgetResult<()> {
    let export = BudgetExport::from_model(model);
    let export_err = |e: std::io::Error| BudgetError::Export(e.to_string());

    writeln!(writer, "# budget-builder export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer, "# Amounts are in cents.").map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}
