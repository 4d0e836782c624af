//! Reports module for budget-builder
//!
//! Builds the aggregate rows of the budget table (group subtotals, section
//! totals, profit/loss and closing balance) into plain data for display and
//! export.

pub mod summary;

pub use summary::{BudgetSummary, GroupSubtotalRow, MonthSummary, SectionTotalRow};
