//! CSV export
//!
//! Header: `Section,Group,Subcategory,<month labels...>`, then one row per
//! subcategory with amounts as plain decimals.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::services::BudgetModel;

/// Export every subcategory row to CSV
pub fn export_csv<W: Write>(model: &BudgetModel, writer: &mut W) -> BudgetResult<()> {
    let export_err = |e: ::csv::Error| BudgetError::Export(e.to_string());
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    let header = ["Section", "Group", "Subcategory"]
        .into_iter()
        .map(str::to_string)
        .chain(model.months().labels().iter().cloned());
    csv_writer.write_record(header).map_err(export_err)?;

    for section in model.sections() {
        for group in &section.groups {
            for leaf in &group.subcategories {
                let record = [
                    section.parent_category_name.clone(),
                    group.category.clone(),
                    leaf.name.clone(),
                ]
                .into_iter()
                .chain(leaf.values.iter().map(|v| v.to_string()));
                csv_writer.write_record(record).map_err(export_err)?;
            }
        }
    }

    csv_writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::GroupRef;

    #[test]
    fn test_csv_export() {
        let mut output = Vec::new();
        export_csv(&BudgetModel::seed(), &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "Section,Group,Subcategory,January 2024,February 2024");
        assert_eq!(lines[1], "Main Income,Income,General Income,100.00,120.00");
        assert_eq!(lines[11], "expenses,salariesCategories,Remote Salaries,20.00,0.00");
    }

    #[test]
    fn test_csv_quotes_names_with_commas() {
        let mut model = BudgetModel::seed();
        model
            .rename_subcategory(GroupRef::new(0, 0).leaf(0), "Fees, misc")
            .unwrap();

        let mut output = Vec::new();
        export_csv(&model, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("\"Fees, misc\""));
    }
}
