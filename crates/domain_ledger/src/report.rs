//! Financial reporting views
//!
//! Range queries return flat line records suitable for direct display; the
//! period summary reduces them to the aggregates consumed by dashboards and
//! the external PDF exporter. Summaries are pure functions of rows already
//! fetched, so they can be computed and tested without a database.

use chrono::{DateTime, NaiveDate, Utc};
use core_kernel::{Currency, Money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;
use crate::sale::SaleKind;

/// One sale within a reporting range, joined with its product name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaleLine {
    pub occurred_at: DateTime<Utc>,
    pub product_name: String,
    pub quantity: u32,
    pub price: Money,
    pub kind: SaleKind,
}

/// One expense within a reporting range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseLine {
    pub occurred_at: DateTime<Utc>,
    pub description: String,
    pub category: String,
    pub amount: Money,
}

/// Sale amount summed over one calendar date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySalesPoint {
    pub date: NaiveDate,
    pub total: Money,
}

/// Period aggregates consumed by the dashboard and the PDF exporter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Human-readable period label, e.g. "2026-07-01 to 2026-07-31"
    pub period: String,
    /// Sum of captured sale prices over the period
    pub total_sales: Money,
    /// Sum of expense amounts over the period
    pub total_expenses: Money,
    /// Sales minus expenses
    pub profit: Money,
    /// Number of sale lines in the period
    pub sale_count: usize,
    /// Mean captured price per sale, zero for an empty period
    pub average_ticket: Money,
}

impl FinancialSummary {
    /// Reduces range lines to period aggregates
    pub fn from_lines(
        period: impl Into<String>,
        currency: Currency,
        sales: &[SaleLine],
        expenses: &[ExpenseLine],
    ) -> Result<Self, LedgerError> {
        let mut total_sales = Money::zero(currency);
        for line in sales {
            total_sales = total_sales.checked_add(&line.price)?;
        }

        let mut total_expenses = Money::zero(currency);
        for line in expenses {
            total_expenses = total_expenses.checked_add(&line.amount)?;
        }

        let profit = total_sales.checked_sub(&total_expenses)?;
        let average_ticket = if sales.is_empty() {
            Money::zero(currency)
        } else {
            total_sales.divide(Decimal::from(sales.len() as u64))?
        };

        Ok(Self {
            period: period.into(),
            total_sales,
            total_expenses,
            profit,
            sale_count: sales.len(),
            average_ticket,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn sale(price: Decimal) -> SaleLine {
        SaleLine {
            occurred_at: Utc.with_ymd_and_hms(2026, 7, 10, 14, 0, 0).unwrap(),
            product_name: "Apple Watch".to_string(),
            quantity: 1,
            price: Money::new(price, Currency::EUR),
            kind: SaleKind::Retail,
        }
    }

    fn expense(amount: Decimal) -> ExpenseLine {
        ExpenseLine {
            occurred_at: Utc.with_ymd_and_hms(2026, 7, 5, 9, 0, 0).unwrap(),
            description: "Monthly rent".to_string(),
            category: "Rent".to_string(),
            amount: Money::new(amount, Currency::EUR),
        }
    }

    #[test]
    fn test_profit_is_sales_minus_expenses() {
        let sales = vec![sale(dec!(450.0)), sale(dec!(540.0))];
        let expenses = vec![expense(dec!(2800.0))];

        let summary =
            FinancialSummary::from_lines("2026-07", Currency::EUR, &sales, &expenses).unwrap();

        assert_eq!(summary.total_sales.amount(), dec!(990.0));
        assert_eq!(summary.total_expenses.amount(), dec!(2800.0));
        assert_eq!(summary.profit.amount(), dec!(-1810.0));
        assert_eq!(summary.sale_count, 2);
    }

    #[test]
    fn test_average_ticket() {
        let sales = vec![sale(dec!(100.0)), sale(dec!(200.0)), sale(dec!(600.0))];
        let summary = FinancialSummary::from_lines("2026-07", Currency::EUR, &sales, &[]).unwrap();

        assert_eq!(summary.average_ticket.amount(), dec!(300.0));
    }

    #[test]
    fn test_empty_period_is_all_zero() {
        let summary = FinancialSummary::from_lines("2026-07", Currency::EUR, &[], &[]).unwrap();

        assert!(summary.total_sales.is_zero());
        assert!(summary.total_expenses.is_zero());
        assert!(summary.profit.is_zero());
        assert!(summary.average_ticket.is_zero());
        assert_eq!(summary.sale_count, 0);
    }
}
