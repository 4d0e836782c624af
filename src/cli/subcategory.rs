//! Subcategory CLI commands

use clap::Subcommand;

use super::{leaf_id, resolve_group};
use crate::audit::EntityType;
use crate::error::BudgetResult;
use crate::storage::Storage;

/// Subcategory subcommands
#[derive(Subcommand)]
pub enum SubcategoryCommands {
    /// Append a new subcategory to a group
    Add {
        /// Section name or index
        section: String,
        /// Group name or index
        group: String,
    },

    /// Delete a subcategory
    Delete {
        /// Section name or index
        section: String,
        /// Group name or index
        group: String,
        /// Subcategory index within the group
        index: usize,
    },

    /// Rename a subcategory
    Rename {
        /// Section name or index
        section: String,
        /// Group name or index
        group: String,
        /// Subcategory index within the group
        index: usize,
        /// New name
        name: String,
    },
}

/// Handle a subcategory command
pub fn handle_subcategory_command(storage: &Storage, cmd: SubcategoryCommands) -> BudgetResult<()> {
    let mut model = storage.load_model()?;

    match cmd {
        SubcategoryCommands::Add { section, group } => {
            let group_ref = resolve_group(&model, &section, &group)?;
            let index = model.add_subcategory(group_ref)?;
            storage.save_model(&model)?;

            let leaf_ref = group_ref.leaf(index);
            let leaf = model.leaf(leaf_ref)?;
            storage.log_create(EntityType::Subcategory, leaf_id(leaf_ref), Some(leaf.name.clone()), leaf);

            println!(
                "Added subcategory '{}' to '{}' at index {}",
                leaf.name,
                model.group(group_ref)?.category,
                index
            );
        }

        SubcategoryCommands::Delete {
            section,
            group,
            index,
        } => {
            let group_ref = resolve_group(&model, &section, &group)?;
            let removed = model.delete_subcategory(group_ref, index)?;
            storage.save_model(&model)?;
            storage.log_delete(
                EntityType::Subcategory,
                leaf_id(group_ref.leaf(index)),
                Some(removed.name.clone()),
                &removed,
            );

            println!("Deleted subcategory '{}'", removed.name);
        }

        SubcategoryCommands::Rename {
            section,
            group,
            index,
            name,
        } => {
            let leaf_ref = resolve_group(&model, &section, &group)?.leaf(index);
            let old_name = model.leaf(leaf_ref)?.name.clone();
            model.rename_subcategory(leaf_ref, &name)?;
            storage.save_model(&model)?;

            let new_name = model.leaf(leaf_ref)?.name.clone();
            storage.log_update(
                EntityType::Subcategory,
                leaf_id(leaf_ref),
                Some(new_name.clone()),
                &old_name,
                &new_name,
                Some(format!("name: {} -> {}", old_name, new_name)),
            );

            println!("Renamed subcategory '{}' to '{}'", old_name, new_name);
        }
    }

    Ok(())
}
