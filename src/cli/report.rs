//! Read-only views of the budget table

use crate::config::settings::Settings;
use crate::display::{format_budget_table, format_summary};
use crate::error::BudgetResult;
use crate::reports::BudgetSummary;
use crate::storage::Storage;

/// Print the full table with subtotal, total, profit/loss and balance rows
pub fn handle_show_command(storage: &Storage) -> BudgetResult<()> {
    let model = storage.load_model()?;
    print!("{}", format_budget_table(&model));
    Ok(())
}

/// Print the per-month summary
pub fn handle_report_command(storage: &Storage, settings: &Settings) -> BudgetResult<()> {
    let model = storage.load_model()?;
    let summary = BudgetSummary::generate(&model);
    print!("{}", format_summary(&summary, &settings.currency_symbol));

    if let Some(balance) = summary.final_balance() {
        println!();
        println!("Final closing balance: {}", balance.format_with_symbol(&settings.currency_symbol));
    }

    Ok(())
}
