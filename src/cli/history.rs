//! Audit history

use crate::display::format_history;
use crate::error::BudgetResult;
use crate::storage::Storage;

/// Print the most recent audit entries, oldest first
pub fn handle_history_command(storage: &Storage, count: usize) -> BudgetResult<()> {
    let entries = storage.audit().read_recent(count)?;
    print!("{}", format_history(&entries));
    Ok(())
}
