//! Unit tests for the ledger domain

use chrono::{TimeZone, Utc};
use core_kernel::{CompanyId, Currency, Money, ProductId, UserId};
use domain_ledger::{
    Expense, ExpenseLine, FinancialSummary, Sale, SaleKind, SaleLine, COST_OF_GOODS_CATEGORY,
};
use rust_decimal_macros::dec;

mod sales {
    use super::*;

    #[test]
    fn test_sale_captures_price_at_time_of_sale() {
        // The captured price must survive even if the product is repriced later.
        let price_then = Money::new(dec!(1200.0), Currency::EUR);
        let sale = Sale::record(
            ProductId::new(),
            2,
            price_then,
            SaleKind::Retail,
            Utc.with_ymd_and_hms(2026, 8, 1, 10, 0, 0).unwrap(),
            UserId::new(),
            CompanyId::well_known(99),
        );

        assert_eq!(sale.price, price_then);
    }

    #[test]
    fn test_wire_values_round_trip() {
        let retail: SaleKind = "varejo".parse().unwrap();
        let wholesale: SaleKind = "atacado".parse().unwrap();

        assert_eq!(retail.as_str(), "varejo");
        assert_eq!(wholesale.as_str(), "atacado");
    }
}

mod expenses {
    use super::*;

    #[test]
    fn test_restock_expense_totals_and_tags() {
        let expense = Expense::cost_of_goods(
            "AirPods Max",
            10,
            Money::new(dec!(380.0), Currency::EUR),
            Utc::now(),
            CompanyId::well_known(99),
        );

        assert_eq!(expense.amount.amount(), dec!(3800.0));
        assert_eq!(expense.category, COST_OF_GOODS_CATEGORY);
        assert!(expense.description.contains("AirPods Max"));
        assert!(expense.description.contains("10x"));
    }

    #[test]
    fn test_direct_expense_entry() {
        let when = Utc.with_ymd_and_hms(2026, 8, 5, 12, 0, 0).unwrap();
        let expense = Expense::record(
            "Marketing/Ads",
            Money::new(dec!(250.0), Currency::EUR),
            "Marketing",
            when,
            CompanyId::well_known(99),
        );

        assert_eq!(expense.occurred_at, when);
        assert_eq!(expense.category, "Marketing");
    }
}

mod summaries {
    use super::*;

    fn line(price: rust_decimal::Decimal) -> SaleLine {
        SaleLine {
            occurred_at: Utc.with_ymd_and_hms(2026, 7, 14, 15, 0, 0).unwrap(),
            product_name: "iPhone 15 Pro".to_string(),
            quantity: 1,
            price: Money::new(price, Currency::EUR),
            kind: SaleKind::Retail,
        }
    }

    #[test]
    fn test_summary_feeds_the_pdf_exporter() {
        let sales = vec![line(dec!(1200.0)), line(dec!(1850.0))];
        let expenses = vec![ExpenseLine {
            occurred_at: Utc.with_ymd_and_hms(2026, 7, 5, 8, 0, 0).unwrap(),
            description: "Monthly rent".to_string(),
            category: "Rent".to_string(),
            amount: Money::new(dec!(2800.0), Currency::EUR),
        }];

        let summary = FinancialSummary::from_lines(
            "2026-07-01 to 2026-07-31",
            Currency::EUR,
            &sales,
            &expenses,
        )
        .unwrap();

        assert_eq!(summary.total_sales.amount(), dec!(3050.0));
        assert_eq!(summary.total_expenses.amount(), dec!(2800.0));
        assert_eq!(summary.profit.amount(), dec!(250.0));
        assert_eq!(summary.period, "2026-07-01 to 2026-07-31");
    }

    #[test]
    fn test_no_data_summary_is_empty_not_an_error() {
        let summary =
            FinancialSummary::from_lines("2026-01", Currency::EUR, &[], &[]).unwrap();
        assert!(summary.profit.is_zero());
    }
}
