//! Summary, month list and history formatting

use crate::audit::AuditEntry;
use crate::models::MonthAxis;
use crate::reports::BudgetSummary;

/// Format the per-month summary with a currency symbol
pub fn format_summary(summary: &BudgetSummary, symbol: &str) -> String {
    if summary.months.is_empty() {
        return "No months in the budget. Add some with 'budget month add'.\n".to_string();
    }

    let label_width = summary
        .months
        .iter()
        .map(|m| m.label.len())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>14}  {:>14}  {:>14}  {:>16}\n",
        "Month",
        "Income",
        "Expenses",
        "Profit/Loss",
        "Closing Balance",
        width = label_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->14}  {:->14}  {:->14}  {:->16}\n",
        "",
        "",
        "",
        "",
        "",
        width = label_width
    ));

    for month in &summary.months {
        output.push_str(&format!(
            "{:<width$}  {:>14}  {:>14}  {:>14}  {:>16}\n",
            month.label,
            month.income.format_with_symbol(symbol),
            month.expenses.format_with_symbol(symbol),
            month.profit_loss.format_with_symbol(symbol),
            month.closing_balance.format_with_symbol(symbol),
            width = label_width
        ));
    }

    output
}

/// Format the month axis with column indices
pub fn format_month_list(months: &MonthAxis) -> String {
    if months.is_empty() {
        return "No months.\n".to_string();
    }

    months
        .labels()
        .iter()
        .enumerate()
        .map(|(i, label)| format!("{:>3}  {}\n", i, label))
        .collect()
}

/// Format audit entries, oldest first
pub fn format_history(entries: &[AuditEntry]) -> String {
    if entries.is_empty() {
        return "No changes recorded.\n".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&entry.format_human_readable());
        output.push('\n');
    }
    output
}
