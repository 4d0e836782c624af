//! Display formatting for terminal output
//!
//! Renders the budget table, the summary report, the month axis and the
//! audit history as plain text.

pub mod table;
pub mod summary;

pub use summary::{format_history, format_month_list, format_summary};
pub use table::format_budget_table;
