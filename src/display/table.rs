//! Budget table rendering
//!
//! Lays the model out the way the editing table shows it: one column per
//! month, a header row per section and group, the leaf rows with their
//! indices, a subtotal under each group, a total under each section, and
//! the profit/loss and closing balance rows at the bottom.

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use crate::models::Money;
use crate::reports::BudgetSummary;
use crate::services::BudgetModel;

/// Format the whole budget table
pub fn format_budget_table(model: &BudgetModel) -> String {
    if model.sections().is_empty() {
        return "No sections found.\n\nRun 'budget init' to create the starter budget.\n"
            .to_string();
    }

    let summary = BudgetSummary::generate(model);
    let months = model.months().labels();
    let blank_row = || std::iter::repeat(String::new()).take(months.len());

    let mut builder = Builder::default();
    builder.push_record(std::iter::once("Category".to_string()).chain(months.iter().cloned()));

    let mut group_rows = summary.groups.iter();

    for (section_index, section) in model.sections().iter().enumerate() {
        builder.push_record(
            std::iter::once(format!(
                "[{}] {} ({})",
                section_index, section.parent_category_name, section.kind
            ))
            .chain(blank_row()),
        );

        for (group_index, group) in section.groups.iter().enumerate() {
            builder.push_record(
                std::iter::once(format!("  [{}] {}", group_index, group.category)).chain(blank_row()),
            );

            for (leaf_index, leaf) in group.subcategories.iter().enumerate() {
                builder.push_record(
                    std::iter::once(format!("    {}. {}", leaf_index, leaf.name))
                        .chain(amounts(&leaf.values)),
                );
            }

            if let Some(row) = group_rows.next() {
                builder.push_record(
                    std::iter::once("    Sub Total".to_string()).chain(amounts(&row.subtotals)),
                );
            }
        }

        if let Some(row) = summary.sections.get(section_index) {
            builder.push_record(
                std::iter::once(format!("Total {}", section.parent_category_name))
                    .chain(amounts(&row.totals)),
            );
        }
    }

    builder.push_record(
        std::iter::once("Profit / Loss".to_string())
            .chain(summary.months.iter().map(|m| m.profit_loss.to_string())),
    );
    builder.push_record(
        std::iter::once("Closing Balance".to_string())
            .chain(summary.months.iter().map(|m| m.closing_balance.to_string())),
    );

    let mut table = builder.build();
    table
        .with(Style::psql())
        .modify(Columns::new(1..), Alignment::right());

    format!("{}\n", table)
}

fn amounts(values: &[Money]) -> impl Iterator<Item = String> + '_ {
    values.iter().map(Money::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, MonthAxis};

    #[test]
    fn test_table_contains_rows_and_aggregates() {
        let output = format_budget_table(&BudgetModel::seed());

        assert!(output.contains("January 2024"));
        assert!(output.contains("February 2024"));
        assert!(output.contains("[0] Main Income (Income)"));
        assert!(output.contains("[1] expenses (Expense)"));
        assert!(output.contains("1. Sales"));
        assert!(output.contains("Sub Total"));
        assert!(output.contains("Total Main Income"));
        assert!(output.contains("1300.00"));
        assert!(output.contains("Profit / Loss"));
        assert!(output.contains("750.00"));
        assert!(output.contains("Closing Balance"));
        assert!(output.contains("1720.00"));
    }

    #[test]
    fn test_empty_budget() {
        let model = BudgetModel::new(MonthAxis::new(), Budget::default()).unwrap();
        let output = format_budget_table(&model);
        assert!(output.contains("No sections found"));
    }
}
