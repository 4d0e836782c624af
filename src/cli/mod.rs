//! CLI command handlers
//!
//! Each handler loads the workbook, applies one table operation, saves the
//! result and records the change in the audit log.

pub mod cell;
pub mod export;
pub mod group;
pub mod history;
pub mod month;
pub mod report;
pub mod subcategory;

pub use cell::{handle_set_command, SetArgs};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use group::{handle_group_command, GroupCommands};
pub use history::handle_history_command;
pub use month::{handle_month_command, MonthCommands};
pub use report::{handle_report_command, handle_show_command};
pub use subcategory::{handle_subcategory_command, SubcategoryCommands};

use crate::error::BudgetResult;
use crate::services::{BudgetModel, GroupRef, LeafRef};

/// Resolve a section argument
///
/// A number is taken as an index as-is, so an out-of-range index surfaces
/// as an invalid-index error from the model rather than a lookup miss.
pub(crate) fn resolve_section(model: &BudgetModel, section: &str) -> BudgetResult<usize> {
    match section.trim().parse::<usize>() {
        Ok(index) => Ok(index),
        Err(_) => model.find_section(section),
    }
}

/// Resolve section and group arguments
pub(crate) fn resolve_group(model: &BudgetModel, section: &str, group: &str) -> BudgetResult<GroupRef> {
    let section_index = resolve_section(model, section)?;
    let group_index = match group.trim().parse::<usize>() {
        Ok(index) => index,
        Err(_) => model.find_group(&section_index.to_string(), group)?.group,
    };
    Ok(GroupRef::new(section_index, group_index))
}

pub(crate) fn group_id(group_ref: GroupRef) -> String {
    format!("{}/{}", group_ref.section, group_ref.group)
}

pub(crate) fn leaf_id(leaf_ref: LeafRef) -> String {
    format!("{}/{}", group_id(leaf_ref.group), leaf_ref.index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_group_by_name_and_index() {
        let model = BudgetModel::seed();
        assert_eq!(
            resolve_group(&model, "expenses", "salariesCategories").unwrap(),
            GroupRef::new(1, 1)
        );
        assert_eq!(resolve_group(&model, "Main Income", "1").unwrap(), GroupRef::new(0, 1));
        // Numeric indices are passed through for the model to check.
        assert_eq!(resolve_group(&model, "0", "7").unwrap(), GroupRef::new(0, 7));
        assert!(resolve_group(&model, "Savings", "0").unwrap_err().is_not_found());
    }

    #[test]
    fn test_ids() {
        let leaf = GroupRef::new(1, 0).leaf(2);
        assert_eq!(group_id(leaf.group), "1/0");
        assert_eq!(leaf_id(leaf), "1/0/2");
    }
}
