//! Month column CLI commands

use clap::Subcommand;

use crate::audit::EntityType;
use crate::display::format_month_list;
use crate::error::BudgetResult;
use crate::storage::Storage;

/// Month subcommands
#[derive(Subcommand)]
pub enum MonthCommands {
    /// List the month columns with their indices
    List,

    /// Append every month from START to END
    Add {
        /// First month (YYYY-MM)
        start: String,
        /// Last month (YYYY-MM); defaults to START
        end: Option<String>,
    },
}

/// Handle a month command
pub fn handle_month_command(storage: &Storage, cmd: MonthCommands) -> BudgetResult<()> {
    match cmd {
        MonthCommands::List => {
            let model = storage.load_model()?;
            print!("{}", format_month_list(model.months()));
        }

        MonthCommands::Add { start, end } => {
            let mut model = storage.load_model()?;
            let end = end.as_deref().unwrap_or(start.as_str());

            let added = model.append_month_range(Some(&start), Some(end));
            if added.is_empty() {
                println!("No months added.");
                return Ok(());
            }

            storage.save_model(&model)?;
            for label in &added {
                storage.log_create(EntityType::Month, label.clone(), Some(label.clone()), label);
            }

            println!("Added {} month(s): {}", added.len(), added.join(", "));
        }
    }

    Ok(())
}
