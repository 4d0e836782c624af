//! Budget summary report
//!
//! One pass over the model producing every aggregate row the table shows:
//! a subtotal row per category group, a total row per section, and the
//! per-month income, expense, profit/loss and closing balance figures.

use serde::Serialize;

use crate::models::{Money, SectionKind};
use crate::services::{subtotal, BudgetModel};

/// Subtotals of one category group, one per month column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSubtotalRow {
    pub section_name: String,
    pub group_name: String,
    pub subtotals: Vec<Money>,
}

/// Column totals of one parent section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionTotalRow {
    pub section_name: String,
    pub kind: SectionKind,
    pub totals: Vec<Money>,
}

/// Bottom-line figures for one month column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthSummary {
    pub label: String,
    pub income: Money,
    pub expenses: Money,
    pub profit_loss: Money,
    pub closing_balance: Money,
}

/// All aggregate rows of the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetSummary {
    pub groups: Vec<GroupSubtotalRow>,
    pub sections: Vec<SectionTotalRow>,
    pub months: Vec<MonthSummary>,
}

impl BudgetSummary {
    /// Generate the summary for the model's current state
    pub fn generate(model: &BudgetModel) -> Self {
        let month_count = model.months().len();

        let mut groups = Vec::new();
        let mut sections = Vec::with_capacity(model.sections().len());

        for (section_index, section) in model.sections().iter().enumerate() {
            for group in &section.groups {
                groups.push(GroupSubtotalRow {
                    section_name: section.parent_category_name.clone(),
                    group_name: group.category.clone(),
                    subtotals: (0..month_count)
                        .map(|month| subtotal(&group.subcategories, month))
                        .collect(),
                });
            }

            sections.push(SectionTotalRow {
                section_name: section.parent_category_name.clone(),
                kind: section.kind,
                totals: (0..month_count)
                    .map(|month| model.column_total(section_index, month))
                    .collect(),
            });
        }

        let closing = model.closing_balances();
        let months = model
            .months()
            .labels()
            .iter()
            .zip(closing)
            .enumerate()
            .map(|(month, (label, closing_balance))| {
                let (income, expenses) = split_by_kind(&sections, month);
                MonthSummary {
                    label: label.clone(),
                    income,
                    expenses,
                    profit_loss: model.profit_loss(month),
                    closing_balance,
                }
            })
            .collect();

        Self {
            groups,
            sections,
            months,
        }
    }

    /// Closing balance after the last month, if there are any months
    pub fn final_balance(&self) -> Option<Money> {
        self.months.last().map(|m| m.closing_balance)
    }
}

fn split_by_kind(sections: &[SectionTotalRow], month: usize) -> (Money, Money) {
    sections.iter().fold(
        (Money::zero(), Money::zero()),
        |(income, expenses), section| {
            let total = section.totals.get(month).copied().unwrap_or_default();
            match section.kind {
                SectionKind::Income => (income + total, expenses),
                SectionKind::Expense => (income, expenses + total),
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::GroupRef;

    #[test]
    fn test_seed_summary() {
        let summary = BudgetSummary::generate(&BudgetModel::seed());

        assert_eq!(summary.groups.len(), 4);
        assert_eq!(summary.groups[0].group_name, "Income");
        assert_eq!(
            summary.groups[0].subtotals,
            vec![Money::from_units(300), Money::from_units(720)]
        );
        assert_eq!(
            summary.groups[3].subtotals,
            vec![Money::from_units(200), Money::from_units(200)]
        );

        assert_eq!(summary.sections[0].totals[0], Money::from_units(1300));
        assert_eq!(summary.sections[1].kind, SectionKind::Expense);

        let jan = &summary.months[0];
        assert_eq!(jan.label, "January 2024");
        assert_eq!(jan.income, Money::from_units(1300));
        assert_eq!(jan.expenses, Money::from_units(550));
        assert_eq!(jan.profit_loss, Money::from_units(750));
        assert_eq!(jan.closing_balance, Money::from_units(750));

        let feb = &summary.months[1];
        assert_eq!(feb.profit_loss, Money::from_units(970));
        assert_eq!(feb.closing_balance, Money::from_units(1720));
        assert_eq!(summary.final_balance(), Some(Money::from_units(1720)));
    }

    #[test]
    fn test_summary_tracks_new_rows_and_months() {
        let mut model = BudgetModel::seed();
        model.append_month_range(Some("2024-03"), Some("2024-03"));
        let group = model.add_category_group(0).unwrap();
        model
            .set_value(GroupRef::new(0, group).leaf(0), 2, Money::from_units(80))
            .unwrap();

        let summary = BudgetSummary::generate(&model);
        assert_eq!(summary.months.len(), 3);
        assert_eq!(summary.groups.len(), 5);
        assert_eq!(summary.groups[2].group_name, "New Category Group");
        assert_eq!(summary.months[2].income, Money::from_units(80));
        assert_eq!(summary.months[2].closing_balance, Money::from_units(1800));
    }

    #[test]
    fn test_empty_model() {
        let summary = BudgetSummary::generate(&BudgetModel::default());
        assert!(summary.groups.is_empty());
        assert!(summary.months.is_empty());
        assert_eq!(summary.final_balance(), None);
    }
}
