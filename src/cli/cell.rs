//! Cell editing

use clap::Args;

use super::{leaf_id, resolve_group};
use crate::audit::EntityType;
use crate::config::settings::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;
use crate::storage::Storage;

/// Arguments for `budget set`
#[derive(Args)]
pub struct SetArgs {
    /// Section name or index
    pub section: String,
    /// Group name or index
    pub group: String,
    /// Subcategory index within the group
    pub index: usize,
    /// Month label, YYYY-MM or column index
    pub month: String,
    /// Amount (e.g., "250", "250.00", "-12.50")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
}

/// Set one cell of the budget table
pub fn handle_set_command(storage: &Storage, settings: &Settings, args: SetArgs) -> BudgetResult<()> {
    let amount = Money::parse(&args.amount)
        .map_err(|e| BudgetError::Validation(e.to_string()))?;

    let mut model = storage.load_model()?;
    let leaf_ref = resolve_group(&model, &args.section, &args.group)?.leaf(args.index);
    let month_index = match args.month.trim().parse::<usize>() {
        Ok(index) => index,
        Err(_) => model.find_month(&args.month)?,
    };

    let previous = model.set_value(leaf_ref, month_index, amount)?;
    storage.save_model(&model)?;

    let leaf_name = model.leaf(leaf_ref)?.name.clone();
    let label = model.months().get(month_index).unwrap_or_default().to_string();
    storage.log_update(
        EntityType::Cell,
        format!("{}@{}", leaf_id(leaf_ref), month_index),
        Some(format!("{} / {}", leaf_name, label)),
        &previous,
        &amount,
        Some(format!("{} -> {}", previous, amount)),
    );

    let symbol = &settings.currency_symbol;
    println!(
        "Set {} / {}: {} -> {}",
        leaf_name,
        label,
        previous.format_with_symbol(symbol),
        amount.format_with_symbol(symbol)
    );

    Ok(())
}
