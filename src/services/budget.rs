//! Budget model
//!
//! `BudgetModel` owns the month axis and the budget tree and provides every
//! mutation the budget table offers: appending month columns, adding and
//! deleting category groups and subcategories, renaming rows and editing
//! cells. Aggregates live in [`crate::services::totals`].
//!
//! Every mutation either applies completely or, when it reports an error,
//! leaves the model exactly as it was. After any call returns, each leaf has
//! one value per month column.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{
    Budget, CategoryGroup, LeafCategory, Money, Month, MonthAxis, ParentSection, MAX_CELL_CENTS,
    NEW_SUBCATEGORY_NAME, SEED_MONTHS,
};

/// Longest month range a single append accepts (one century)
pub const MAX_APPEND_MONTHS: u64 = 1200;

/// Address of a category group: section index and group index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupRef {
    pub section: usize,
    pub group: usize,
}

impl GroupRef {
    pub fn new(section: usize, group: usize) -> Self {
        Self { section, group }
    }

    /// Address of a leaf within this group
    pub fn leaf(self, index: usize) -> LeafRef {
        LeafRef { group: self, index }
    }
}

/// Address of a leaf category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeafRef {
    pub group: GroupRef,
    pub index: usize,
}

/// The budget table: month columns plus the section/group/leaf tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetModel {
    months: MonthAxis,
    sections: Budget,
}

impl BudgetModel {
    /// Create a model from parts, checking the column-length invariant
    pub fn new(months: MonthAxis, sections: Budget) -> BudgetResult<Self> {
        let model = Self { months, sections };
        model.validate()?;
        Ok(model)
    }

    /// The starting table: "January 2024" and "February 2024" with the
    /// sample income and expense rows
    pub fn seed() -> Self {
        Self {
            months: MonthAxis::from_labels(SEED_MONTHS),
            sections: Budget::seed(),
        }
    }

    pub fn months(&self) -> &MonthAxis {
        &self.months
    }

    pub fn budget(&self) -> &Budget {
        &self.sections
    }

    pub fn sections(&self) -> &[ParentSection] {
        self.sections.sections()
    }

    /// Check that every leaf has exactly one value per month column
    pub fn validate(&self) -> BudgetResult<()> {
        if self.months.has_duplicates() {
            return Err(BudgetError::Validation(
                "Month columns contain duplicate labels".into(),
            ));
        }

        let expected = self.months.len();
        for section in self.sections.sections() {
            for group in &section.groups {
                for leaf in &group.subcategories {
                    if leaf.values.len() != expected {
                        return Err(BudgetError::Validation(format!(
                            "'{}' in '{}' has {} values but there are {} months",
                            leaf.name,
                            group.category,
                            leaf.values.len(),
                            expected
                        )));
                    }
                    if let Some(value) = leaf.values.iter().find(|v| !v.fits_cell()) {
                        return Err(BudgetError::Validation(format!(
                            "'{}' in '{}' holds {} which exceeds the cell limit",
                            leaf.name, group.category, value
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    // === Month columns ===

    /// Append every month from `start_month` to `end_month` (both "YYYY-MM")
    ///
    /// Missing, blank or unparseable bounds, a start after the end and a
    /// range longer than [`MAX_APPEND_MONTHS`] leave the table unchanged.
    /// Months already on the axis are skipped. Returns the labels that were
    /// appended.
    pub fn append_month_range(
        &mut self,
        start_month: Option<&str>,
        end_month: Option<&str>,
    ) -> Vec<String> {
        let (Some(start), Some(end)) = (
            start_month.filter(|s| !s.trim().is_empty()),
            end_month.filter(|s| !s.trim().is_empty()),
        ) else {
            return Vec::new();
        };

        let (start, end) = match (Month::parse(start), Month::parse(end)) {
            (Ok(start), Ok(end)) => (start, end),
            (Err(e), _) | (_, Err(e)) => {
                warn!(error = %e, "ignoring month range");
                return Vec::new();
            }
        };

        self.append_months(start, end)
    }

    /// Append every month from `start` to `end` inclusive that is not
    /// already a column, growing every leaf to match
    pub fn append_months(&mut self, start: Month, end: Month) -> Vec<String> {
        if start > end {
            debug!(%start, %end, "month range is reversed; nothing to add");
            return Vec::new();
        }

        let span = Month::span(start, end);
        if span > MAX_APPEND_MONTHS {
            warn!(%start, %end, span, max = MAX_APPEND_MONTHS, "ignoring month range longer than the limit");
            return Vec::new();
        }

        let added: Vec<String> = Month::range_inclusive(start, end)
            .map(|m| m.label())
            .filter(|label| self.months.push_if_absent(label.clone()))
            .collect();

        if !added.is_empty() {
            self.grow_all_leaves(added.len());
            debug!(count = added.len(), total = self.months.len(), "appended month columns");
        }

        added
    }

    /// Append `count` zero cells to every leaf in the budget
    pub fn grow_all_leaves(&mut self, count: usize) {
        for leaf in self.sections.leaves_mut() {
            leaf.grow(count);
        }
    }

    // === Category groups ===

    /// Append a "New Category Group" holding one zero-filled subcategory
    ///
    /// Returns the index of the new group.
    pub fn add_category_group(&mut self, parent_index: usize) -> BudgetResult<usize> {
        let months = self.months.len();
        let section = self.section_mut(parent_index)?;
        section.groups.push(CategoryGroup::seeded(months));
        let index = section.groups.len() - 1;
        debug!(section = parent_index, group = index, "added category group");
        Ok(index)
    }

    /// Remove a category group and all of its subcategories
    pub fn delete_category_group(
        &mut self,
        parent_index: usize,
        group_index: usize,
    ) -> BudgetResult<CategoryGroup> {
        let section = self.section_mut(parent_index)?;
        let len = section.groups.len();
        if group_index >= len {
            warn!(section = parent_index, group = group_index, len, "delete of unknown category group ignored");
            return Err(BudgetError::invalid_index("category group", group_index, len));
        }

        let removed = section.groups.remove(group_index);
        debug!(section = parent_index, group = group_index, name = %removed.category, "deleted category group");
        Ok(removed)
    }

    /// Change a category group's label
    pub fn rename_category_group(&mut self, group_ref: GroupRef, name: &str) -> BudgetResult<()> {
        let name = validated_name(name, "Category group")?;
        let group = self.group_mut(group_ref)?;
        group.category = name;
        Ok(())
    }

    // === Subcategories ===

    /// Append a zero-filled "New Subcategory" to a group
    ///
    /// Returns the index of the new subcategory.
    pub fn add_subcategory(&mut self, group_ref: GroupRef) -> BudgetResult<usize> {
        let months = self.months.len();
        let group = self.group_mut(group_ref)?;
        group
            .subcategories
            .push(LeafCategory::new(NEW_SUBCATEGORY_NAME, months));
        let index = group.subcategories.len() - 1;
        debug!(section = group_ref.section, group = group_ref.group, index, "added subcategory");
        Ok(index)
    }

    /// Remove the subcategory at `index` from a group
    pub fn delete_subcategory(
        &mut self,
        group_ref: GroupRef,
        index: usize,
    ) -> BudgetResult<LeafCategory> {
        let group = self.group_mut(group_ref)?;
        let len = group.subcategories.len();
        if index >= len {
            warn!(section = group_ref.section, group = group_ref.group, index, len, "delete of unknown subcategory ignored");
            return Err(BudgetError::invalid_index("subcategory", index, len));
        }

        let removed = group.subcategories.remove(index);
        debug!(section = group_ref.section, group = group_ref.group, index, name = %removed.name, "deleted subcategory");
        Ok(removed)
    }

    /// Change a subcategory's name
    pub fn rename_subcategory(&mut self, leaf_ref: LeafRef, name: &str) -> BudgetResult<()> {
        let name = validated_name(name, "Subcategory")?;
        let leaf = self.leaf_mut(leaf_ref)?;
        leaf.name = name;
        Ok(())
    }

    /// Set one cell. Returns the value it replaced.
    pub fn set_value(
        &mut self,
        leaf_ref: LeafRef,
        month_index: usize,
        amount: Money,
    ) -> BudgetResult<Money> {
        if !amount.fits_cell() {
            warn!(%amount, "cell value out of range ignored");
            return Err(BudgetError::Validation(format!(
                "Amount {} exceeds the cell limit of {}",
                amount,
                Money::from_cents(MAX_CELL_CENTS)
            )));
        }

        let months = self.months.len();
        if month_index >= months {
            return Err(BudgetError::invalid_index("month", month_index, months));
        }

        let leaf = self.leaf_mut(leaf_ref)?;
        let cell = leaf
            .values
            .get_mut(month_index)
            .ok_or_else(|| BudgetError::invalid_index("month", month_index, months))?;
        let previous = std::mem::replace(cell, amount);
        Ok(previous)
    }

    // === Lookup ===

    pub fn section(&self, index: usize) -> BudgetResult<&ParentSection> {
        let len = self.sections.sections().len();
        self.sections
            .sections()
            .get(index)
            .ok_or_else(|| BudgetError::invalid_index("section", index, len))
    }

    pub fn group(&self, group_ref: GroupRef) -> BudgetResult<&CategoryGroup> {
        let section = self.section(group_ref.section)?;
        section
            .groups
            .get(group_ref.group)
            .ok_or_else(|| BudgetError::invalid_index("category group", group_ref.group, section.groups.len()))
    }

    pub fn leaf(&self, leaf_ref: LeafRef) -> BudgetResult<&LeafCategory> {
        let group = self.group(leaf_ref.group)?;
        group
            .subcategories
            .get(leaf_ref.index)
            .ok_or_else(|| BudgetError::invalid_index("subcategory", leaf_ref.index, group.subcategories.len()))
    }

    /// Resolve a section by name or zero-based index
    pub fn find_section(&self, identifier: &str) -> BudgetResult<usize> {
        self.sections
            .find_section(identifier)
            .ok_or_else(|| BudgetError::section_not_found(identifier))
    }

    /// Resolve a category group by section and group name or index
    pub fn find_group(&self, section: &str, group: &str) -> BudgetResult<GroupRef> {
        let section_index = self.find_section(section)?;
        let group_index = self.sections.sections()[section_index]
            .find_group(group)
            .ok_or_else(|| BudgetError::group_not_found(group))?;
        Ok(GroupRef::new(section_index, group_index))
    }

    /// Resolve a month column by label, "YYYY-MM" or zero-based index
    pub fn find_month(&self, identifier: &str) -> BudgetResult<usize> {
        self.months
            .resolve(identifier)
            .ok_or_else(|| BudgetError::month_not_found(identifier))
    }

    fn section_mut(&mut self, index: usize) -> BudgetResult<&mut ParentSection> {
        let sections = self.sections.sections_mut();
        let len = sections.len();
        sections
            .get_mut(index)
            .ok_or_else(|| BudgetError::invalid_index("section", index, len))
    }

    fn group_mut(&mut self, group_ref: GroupRef) -> BudgetResult<&mut CategoryGroup> {
        let section = self.section_mut(group_ref.section)?;
        let len = section.groups.len();
        section
            .groups
            .get_mut(group_ref.group)
            .ok_or_else(|| BudgetError::invalid_index("category group", group_ref.group, len))
    }

    fn leaf_mut(&mut self, leaf_ref: LeafRef) -> BudgetResult<&mut LeafCategory> {
        let group = self.group_mut(leaf_ref.group)?;
        let len = group.subcategories.len();
        group
            .subcategories
            .get_mut(leaf_ref.index)
            .ok_or_else(|| BudgetError::invalid_index("subcategory", leaf_ref.index, len))
    }
}

fn validated_name(name: &str, what: &str) -> BudgetResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(BudgetError::Validation(format!("{} name cannot be empty", what)));
    }
    if name.len() > 100 {
        return Err(BudgetError::Validation(format!(
            "{} name too long ({} chars, max 100)",
            what,
            name.len()
        )));
    }
    Ok(name.to_string())
}
