//! Core data models for budget-builder
//!
//! The budget tree (sections, category groups, leaf categories), the month
//! axis that labels its columns, and the fixed-point amount type.

pub mod budget;
pub mod money;
pub mod month;

pub use budget::{
    Budget, CategoryGroup, LeafCategory, ParentSection, SectionKind, NEW_GROUP_NAME,
    NEW_SUBCATEGORY_NAME, SEED_MONTHS,
};
pub use money::{Money, MoneyParseError, MAX_CELL_CENTS};
pub use month::{Month, MonthAxis, MonthParseError};
