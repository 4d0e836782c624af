//! Aggregate rows of the budget table
//!
//! Subtotals per group, totals per section, profit/loss per month and the
//! running closing balance. A cell that does not exist counts as zero, so
//! none of these functions can panic on an out-of-range month.

use crate::models::{LeafCategory, Money};

use super::budget::BudgetModel;

/// Sum of one month column over a slice of leaves
pub fn subtotal(leaves: &[LeafCategory], month_index: usize) -> Money {
    leaves.iter().map(|leaf| leaf.value_at(month_index)).sum()
}

impl BudgetModel {
    /// Subtotal of one month column for a group's leaves
    pub fn subtotal(&self, leaves: &[LeafCategory], month_index: usize) -> Money {
        subtotal(leaves, month_index)
    }

    /// Total of one month column across every group of a section
    ///
    /// An unknown section totals zero.
    pub fn column_total(&self, parent_index: usize, month_index: usize) -> Money {
        self.sections()
            .get(parent_index)
            .map(|section| section.leaves().map(|leaf| leaf.value_at(month_index)).sum())
            .unwrap_or_default()
    }

    /// Income minus expenses for one month
    pub fn profit_loss(&self, month_index: usize) -> Money {
        self.sections()
            .iter()
            .map(|section| {
                let total: Money = section.leaves().map(|leaf| leaf.value_at(month_index)).sum();
                if section.is_income() {
                    total
                } else {
                    -total
                }
            })
            .sum()
    }

    /// Running balance at the end of a month
    ///
    /// Month 0 is its own profit/loss. Later months add the previous closing
    /// balance only while it is positive; a zero or negative balance is not
    /// carried forward.
    pub fn closing_balance(&self, month_index: usize) -> Money {
        (0..=month_index).fold(Money::zero(), |previous, month| {
            carry(previous, self.profit_loss(month))
        })
    }

    /// Closing balance for every month column, computed in one pass
    pub fn closing_balances(&self) -> Vec<Money> {
        let mut previous = Money::zero();
        (0..self.months().len())
            .map(|month| {
                previous = carry(previous, self.profit_loss(month));
                previous
            })
            .collect()
    }
}

fn carry(previous: Money, profit_loss: Money) -> Money {
    if previous.is_positive() {
        profit_loss + previous
    } else {
        profit_loss
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::budget::GroupRef;

    fn units(n: i64) -> Money {
        Money::from_units(n)
    }

    #[test]
    fn test_subtotal() {
        let model = BudgetModel::seed();
        let income = &model.sections()[0].groups[0].subcategories;
        assert_eq!(model.subtotal(income, 0), units(300));
        assert_eq!(model.subtotal(income, 1), units(720));
        assert_eq!(subtotal(income, 9), Money::zero());
        assert_eq!(subtotal(&[], 0), Money::zero());
    }

    #[test]
    fn test_column_total() {
        let model = BudgetModel::seed();
        assert_eq!(model.column_total(0, 0), units(1300));
        assert_eq!(model.column_total(0, 1), units(1870));
        assert_eq!(model.column_total(1, 0), units(550));
        assert_eq!(model.column_total(1, 1), units(900));
        assert_eq!(model.column_total(2, 0), Money::zero());
        assert_eq!(model.column_total(0, 2), Money::zero());
    }

    #[test]
    fn test_profit_loss() {
        let model = BudgetModel::seed();
        assert_eq!(model.profit_loss(0), units(750));
        assert_eq!(model.profit_loss(1), units(970));
        assert_eq!(model.profit_loss(5), Money::zero());
    }

    #[test]
    fn test_closing_balance() {
        let model = BudgetModel::seed();
        assert_eq!(model.closing_balance(0), model.profit_loss(0));
        assert_eq!(model.closing_balance(0), units(750));
        assert_eq!(model.closing_balance(1), units(1720));
    }

    #[test]
    fn test_new_months_total_zero() {
        let mut model = BudgetModel::seed();
        model.append_month_range(Some("2024-03"), Some("2024-04"));
        for month in 2..4 {
            assert_eq!(model.column_total(0, month), Money::zero());
            assert_eq!(model.column_total(1, month), Money::zero());
            assert_eq!(model.profit_loss(month), Money::zero());
        }
        // Positive balances keep carrying through empty months.
        assert_eq!(model.closing_balance(3), units(1720));
    }

    #[test]
    fn test_negative_balance_is_not_carried() {
        let mut model = BudgetModel::seed();
        model.append_month_range(Some("2024-03"), Some("2024-04"));

        let hosting = GroupRef::new(1, 0).leaf(2);
        let sales = GroupRef::new(0, 0).leaf(1);

        // March: 5000 of hosting drives the balance negative.
        model.set_value(hosting, 2, units(5000)).unwrap();
        // April: 100 of income only.
        model.set_value(sales, 3, units(100)).unwrap();

        assert_eq!(model.profit_loss(2), units(-5000));
        assert_eq!(model.closing_balance(2), units(-5000 + 1720));
        assert_eq!(model.closing_balance(3), units(100));
    }

    #[test]
    fn test_zero_balance_is_not_carried() {
        let mut model = BudgetModel::seed();
        model.append_month_range(Some("2024-03"), Some("2024-04"));
        model
            .set_value(GroupRef::new(1, 0).leaf(0), 2, units(1720))
            .unwrap();
        model
            .set_value(GroupRef::new(0, 1).leaf(0), 3, units(40))
            .unwrap();

        assert_eq!(model.closing_balance(2), Money::zero());
        assert_eq!(model.closing_balance(3), units(40));
    }

    #[test]
    fn test_closing_balances_match_single_lookups() {
        let mut model = BudgetModel::seed();
        model.append_month_range(Some("2024-03"), Some("2024-06"));
        model
            .set_value(GroupRef::new(1, 1).leaf(0), 3, units(9000))
            .unwrap();
        model
            .set_value(GroupRef::new(0, 1).leaf(1), 4, units(250))
            .unwrap();

        let series = model.closing_balances();
        assert_eq!(series.len(), model.months().len());
        for (month, balance) in series.iter().enumerate() {
            assert_eq!(*balance, model.closing_balance(month));
        }
    }

    #[test]
    fn test_income_classification_follows_kind() {
        let mut model = BudgetModel::seed();
        // A new expense group counts against profit/loss.
        let index = model.add_category_group(1).unwrap();
        model
            .set_value(GroupRef::new(1, index).leaf(0), 0, units(50))
            .unwrap();
        assert_eq!(model.profit_loss(0), units(700));
    }
}
