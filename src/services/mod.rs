//! Service layer for budget-builder
//!
//! `BudgetModel` owns the table state and exposes its mutations; the
//! aggregate rows (subtotals, totals, profit/loss, closing balance) are
//! implemented alongside in `totals`.

pub mod budget;
pub mod totals;

pub use budget::{BudgetModel, GroupRef, LeafRef, MAX_APPEND_MONTHS};
pub use totals::subtotal;
