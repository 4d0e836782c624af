//! Budget tree: sections, category groups and leaf categories
//!
//! The budget is a three-level tree. Parent sections (income or expense)
//! contain category groups, and each group holds the leaf categories that
//! carry one value per month column.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Name given to subcategories created from the table
pub const NEW_SUBCATEGORY_NAME: &str = "New Subcategory";

/// Name given to category groups created from the table
pub const NEW_GROUP_NAME: &str = "New Category Group";

/// Months in the seed budget
pub const SEED_MONTHS: [&str; 2] = ["January 2024", "February 2024"];

/// Section name that older workbooks used to mark the income section
pub const LEGACY_INCOME_SECTION_NAME: &str = "Main Income";

/// Whether a section's totals add to or subtract from profit/loss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Income,
    Expense,
}

impl SectionKind {
    /// Classification for sections that were saved without an explicit kind
    pub fn infer_from_name(name: &str) -> Self {
        if name == LEGACY_INCOME_SECTION_NAME {
            Self::Income
        } else {
            Self::Expense
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// The lowest-level line item: one value per month column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeafCategory {
    pub name: String,

    /// Cell values, index-aligned with the month axis
    pub values: Vec<Money>,
}

impl LeafCategory {
    /// Create a leaf with `months` zero cells
    pub fn new(name: impl Into<String>, months: usize) -> Self {
        Self {
            name: name.into(),
            values: vec![Money::zero(); months],
        }
    }

    /// Create a leaf from whole-unit amounts
    pub fn with_values(name: impl Into<String>, units: &[i64]) -> Self {
        Self {
            name: name.into(),
            values: units.iter().copied().map(Money::from_units).collect(),
        }
    }

    /// Value for a month column; a missing cell reads as zero
    pub fn value_at(&self, month_index: usize) -> Money {
        self.values.get(month_index).copied().unwrap_or_default()
    }

    /// Append `count` zero cells
    pub fn grow(&mut self, count: usize) {
        self.values.resize(self.values.len() + count, Money::zero());
    }
}

/// A labelled cluster of leaf categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryGroup {
    /// Group label
    pub category: String,

    #[serde(default)]
    pub subcategories: Vec<LeafCategory>,
}

impl CategoryGroup {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            subcategories: Vec::new(),
        }
    }

    /// A new group seeded with one zero-filled subcategory
    pub fn seeded(months: usize) -> Self {
        Self {
            category: NEW_GROUP_NAME.to_string(),
            subcategories: vec![LeafCategory::new(NEW_SUBCATEGORY_NAME, months)],
        }
    }

    pub fn with_subcategory(mut self, leaf: LeafCategory) -> Self {
        self.subcategories.push(leaf);
        self
    }

    /// Find a subcategory by zero-based index or name (case-insensitive)
    pub fn find_subcategory(&self, identifier: &str) -> Option<usize> {
        let identifier = identifier.trim();
        if let Ok(index) = identifier.parse::<usize>() {
            return (index < self.subcategories.len()).then_some(index);
        }
        self.subcategories
            .iter()
            .position(|leaf| leaf.name.eq_ignore_ascii_case(identifier))
    }
}

/// Top-level income or expense section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentSection {
    pub parent_category_name: String,
    pub kind: SectionKind,
    pub groups: Vec<CategoryGroup>,
}

impl ParentSection {
    pub fn new(name: impl Into<String>, kind: SectionKind) -> Self {
        Self {
            parent_category_name: name.into(),
            kind,
            groups: Vec::new(),
        }
    }

    pub fn with_group(mut self, group: CategoryGroup) -> Self {
        self.groups.push(group);
        self
    }

    pub fn is_income(&self) -> bool {
        self.kind == SectionKind::Income
    }

    /// Every leaf in every group of this section
    pub fn leaves(&self) -> impl Iterator<Item = &LeafCategory> {
        self.groups.iter().flat_map(|g| g.subcategories.iter())
    }

    /// Find a group by zero-based index or label (case-insensitive)
    pub fn find_group(&self, identifier: &str) -> Option<usize> {
        let identifier = identifier.trim();
        if let Ok(index) = identifier.parse::<usize>() {
            return (index < self.groups.len()).then_some(index);
        }
        self.groups
            .iter()
            .position(|g| g.category.eq_ignore_ascii_case(identifier))
    }
}

// Sections written before `kind` existed are classified by name.
impl<'de> Deserialize<'de> for ParentSection {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawSection {
            parent_category_name: String,
            #[serde(default)]
            kind: Option<SectionKind>,
            #[serde(default)]
            groups: Vec<CategoryGroup>,
        }

        let raw = RawSection::deserialize(deserializer)?;
        let kind = raw
            .kind
            .unwrap_or_else(|| SectionKind::infer_from_name(&raw.parent_category_name));

        Ok(Self {
            parent_category_name: raw.parent_category_name,
            kind,
            groups: raw.groups,
        })
    }
}

/// The root of the budget tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Budget(pub Vec<ParentSection>);

impl Budget {
    pub fn sections(&self) -> &[ParentSection] {
        &self.0
    }

    pub fn sections_mut(&mut self) -> &mut Vec<ParentSection> {
        &mut self.0
    }

    /// Every leaf in the budget
    pub fn leaves(&self) -> impl Iterator<Item = &LeafCategory> {
        self.0.iter().flat_map(|s| s.leaves())
    }

    pub fn leaves_mut(&mut self) -> impl Iterator<Item = &mut LeafCategory> {
        self.0
            .iter_mut()
            .flat_map(|s| s.groups.iter_mut())
            .flat_map(|g| g.subcategories.iter_mut())
    }

    /// Find a section by zero-based index or name (case-insensitive)
    pub fn find_section(&self, identifier: &str) -> Option<usize> {
        let identifier = identifier.trim();
        if let Ok(index) = identifier.parse::<usize>() {
            return (index < self.0.len()).then_some(index);
        }
        self.0
            .iter()
            .position(|s| s.parent_category_name.eq_ignore_ascii_case(identifier))
    }

    /// The starting budget: one income and one expense section, two months
    pub fn seed() -> Self {
        let income = ParentSection::new(LEGACY_INCOME_SECTION_NAME, SectionKind::Income)
            .with_group(
                CategoryGroup::new("Income")
                    .with_subcategory(LeafCategory::with_values("General Income", &[100, 120]))
                    .with_subcategory(LeafCategory::with_values("Sales", &[200, 400]))
                    .with_subcategory(LeafCategory::with_values("Commission", &[0, 200])),
            )
            .with_group(
                CategoryGroup::new("Other Income")
                    .with_subcategory(LeafCategory::with_values("Training", &[500, 550]))
                    .with_subcategory(LeafCategory::with_values("Consulting", &[500, 600])),
            );

        let expenses = ParentSection::new("expenses", SectionKind::Expense)
            .with_group(
                CategoryGroup::new("expenseCategories")
                    .with_subcategory(LeafCategory::with_values("Operational Expenses", &[50, 100]))
                    .with_subcategory(LeafCategory::with_values("Management Fees", &[100, 200]))
                    .with_subcategory(LeafCategory::with_values("Cloud Hosting", &[200, 400])),
            )
            .with_group(
                CategoryGroup::new("salariesCategories")
                    .with_subcategory(LeafCategory::with_values("Full Time Dev Salaries", &[100, 120]))
                    .with_subcategory(LeafCategory::with_values("Part Time Dev Salaries", &[80, 80]))
                    .with_subcategory(LeafCategory::with_values("Remote Salaries", &[20, 0])),
            );

        Self(vec![income, expenses])
    }
}
