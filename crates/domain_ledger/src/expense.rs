//! Expense ledger entries
//!
//! Expenses are entered directly (rent, marketing, taxes) or generated by a
//! restock, in which case they carry the fixed cost-of-goods category and a
//! description naming the product, quantity, and unit cost.

use chrono::{DateTime, Utc};
use core_kernel::{CompanyId, ExpenseId, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category tag of restock-generated expenses
pub const COST_OF_GOODS_CATEGORY: &str = "cost of goods";

/// An append-only expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique expense identifier
    pub id: ExpenseId,
    /// What the money was spent on
    pub description: String,
    /// Total amount
    pub amount: Money,
    /// Free-form category (fixed for restock expenses)
    pub category: String,
    /// When the expense was incurred
    pub occurred_at: DateTime<Utc>,
    /// Owning tenant
    pub company_id: CompanyId,
}

impl Expense {
    /// Records a directly-entered expense
    pub fn record(
        description: impl Into<String>,
        amount: Money,
        category: impl Into<String>,
        occurred_at: DateTime<Utc>,
        company_id: CompanyId,
    ) -> Self {
        Self {
            id: ExpenseId::new_v7(),
            description: description.into(),
            amount,
            category: category.into(),
            occurred_at,
            company_id,
        }
    }

    /// Records the cost-of-goods expense generated by a restock
    ///
    /// The amount is quantity times unit cost; the description embeds the
    /// product name, quantity, and unit cost for the expense listing.
    pub fn cost_of_goods(
        product_name: &str,
        quantity: u32,
        unit_cost: Money,
        occurred_at: DateTime<Utc>,
        company_id: CompanyId,
    ) -> Self {
        let total = unit_cost.multiply(Decimal::from(quantity));
        let description = format!(
            "Stock replenishment: {} ({}x {})",
            product_name, quantity, unit_cost
        );
        Self::record(
            description,
            total,
            COST_OF_GOODS_CATEGORY,
            occurred_at,
            company_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cost_of_goods_amount_is_quantity_times_unit_cost() {
        let expense = Expense::cost_of_goods(
            "iPhone 15 Pro",
            10,
            Money::new(dec!(800.0), Currency::EUR),
            Utc::now(),
            CompanyId::new(),
        );

        assert_eq!(expense.amount.amount(), dec!(8000.0));
        assert_eq!(expense.category, COST_OF_GOODS_CATEGORY);
    }

    #[test]
    fn test_cost_of_goods_description_names_the_replenishment() {
        let expense = Expense::cost_of_goods(
            "MacBook M3",
            3,
            Money::new(dec!(1400.00), Currency::EUR),
            Utc::now(),
            CompanyId::new(),
        );

        assert_eq!(
            expense.description,
            "Stock replenishment: MacBook M3 (3x € 1400.00)"
        );
    }

    #[test]
    fn test_direct_expense_keeps_given_category() {
        let expense = Expense::record(
            "Monthly rent",
            Money::new(dec!(2800.0), Currency::EUR),
            "Rent",
            Utc::now(),
            CompanyId::new(),
        );

        assert_eq!(expense.category, "Rent");
        assert_eq!(expense.amount.amount(), dec!(2800.0));
    }
}
