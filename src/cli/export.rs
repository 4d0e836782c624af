//! CLI command for data export

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_csv, export_json, export_yaml};
use crate::services::BudgetModel;
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one row per subcategory)
    Csv,
    /// JSON format (workbook plus aggregates)
    Json,
    /// YAML format (same as JSON, human-readable)
    Yaml,
}

/// Arguments for `budget export`
#[derive(Args)]
pub struct ExportArgs {
    /// Export format
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the export command
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> BudgetResult<()> {
    let model = storage.load_model()?;

    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| BudgetError::Export(format!("Failed to create {}: {}", path.display(), e)))?;
            let mut writer = BufWriter::new(file);
            write_export(&model, args.format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| BudgetError::Export(e.to_string()))?;
            eprintln!("Exported {:?} to {}", args.format, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(&model, args.format, &mut writer)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(model: &BudgetModel, format: ExportFormat, writer: &mut W) -> BudgetResult<()> {
    match format {
        ExportFormat::Csv => export_csv(model, writer),
        ExportFormat::Json => export_json(model, writer),
        ExportFormat::Yaml => export_yaml(model, writer),
    }
}
