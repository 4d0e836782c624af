//! Category group CLI commands

use clap::Subcommand;

use super::{group_id, resolve_group, resolve_section};
use crate::audit::EntityType;
use crate::error::BudgetResult;
use crate::services::GroupRef;
use crate::storage::Storage;

/// Category group subcommands
#[derive(Subcommand)]
pub enum GroupCommands {
    /// Append a new category group to a section
    Add {
        /// Section name or index
        section: String,
    },

    /// Delete a category group and all of its subcategories
    Delete {
        /// Section name or index
        section: String,
        /// Group name or index
        group: String,
    },

    /// Rename a category group
    Rename {
        /// Section name or index
        section: String,
        /// Group name or index
        group: String,
        /// New name
        name: String,
    },
}

/// Handle a category group command
pub fn handle_group_command(storage: &Storage, cmd: GroupCommands) -> BudgetResult<()> {
    let mut model = storage.load_model()?;

    match cmd {
        GroupCommands::Add { section } => {
            let section_index = resolve_section(&model, &section)?;
            let group_index = model.add_category_group(section_index)?;
            storage.save_model(&model)?;

            let group_ref = GroupRef::new(section_index, group_index);
            let group = model.group(group_ref)?;
            storage.log_create(
                EntityType::CategoryGroup,
                group_id(group_ref),
                Some(group.category.clone()),
                group,
            );

            println!(
                "Added category group '{}' to '{}' at index {}",
                group.category,
                model.section(section_index)?.parent_category_name,
                group_index
            );
        }

        GroupCommands::Delete { section, group } => {
            let group_ref = resolve_group(&model, &section, &group)?;
            let removed = model.delete_category_group(group_ref.section, group_ref.group)?;
            storage.save_model(&model)?;
            storage.log_delete(
                EntityType::CategoryGroup,
                group_id(group_ref),
                Some(removed.category.clone()),
                &removed,
            );

            println!(
                "Deleted category group '{}' ({} subcategories)",
                removed.category,
                removed.subcategories.len()
            );
        }

        GroupCommands::Rename {
            section,
            group,
            name,
        } => {
            let group_ref = resolve_group(&model, &section, &group)?;
            let old_name = model.group(group_ref)?.category.clone();
            model.rename_category_group(group_ref, &name)?;
            storage.save_model(&model)?;

            let new_name = model.group(group_ref)?.category.clone();
            storage.log_update(
                EntityType::CategoryGroup,
                group_id(group_ref),
                Some(new_name.clone()),
                &old_name,
                &new_name,
                Some(format!("name: {} -> {}", old_name, new_name)),
            );

            println!("Renamed category group '{}' to '{}'", old_name, new_name);
        }
    }

    Ok(())
}
