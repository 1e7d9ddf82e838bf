//! Unit tests for the Money module
//!
//! Tests cover money creation, arithmetic, currency handling, and the
//! display format used on receipts and expense descriptions.

use core_kernel::{Currency, Money, MoneyError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_creates_money_with_correct_amount() {
        let m = Money::new(dec!(1200.00), Currency::EUR);
        assert_eq!(m.amount(), dec!(1200.00));
        assert_eq!(m.currency(), Currency::EUR);
    }

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::EUR);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_from_minor_converts_cents_correctly() {
        let m = Money::from_minor(10050, Currency::EUR);
        assert_eq!(m.amount(), dec!(100.50));
    }

    #[test]
    fn test_from_minor_handles_jpy_no_decimals() {
        let m = Money::from_minor(10000, Currency::JPY);
        assert_eq!(m.amount(), dec!(10000));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::EUR);
        assert!(m.is_zero());
        assert_eq!(m.currency(), Currency::EUR);
    }
}

mod predicates {
    use super::*;

    #[test]
    fn test_is_positive_true_for_positive_amount() {
        let m = Money::new(dec!(450.00), Currency::EUR);
        assert!(m.is_positive());
        assert!(!m.is_negative());
    }

    #[test]
    fn test_is_positive_false_for_zero() {
        let m = Money::zero(Currency::EUR);
        assert!(!m.is_positive());
    }

    #[test]
    fn test_is_negative_for_loss() {
        let m = Money::new(dec!(-120.00), Currency::EUR);
        assert!(m.is_negative());
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_addition_and_subtraction() {
        let revenue = Money::new(dec!(5400.00), Currency::EUR);
        let expenses = Money::new(dec!(2800.00), Currency::EUR);

        assert_eq!((revenue - expenses).amount(), dec!(2600.00));
        assert_eq!((revenue + expenses).amount(), dec!(8200.00));
    }

    #[test]
    fn test_restock_total_is_quantity_times_unit_cost() {
        let unit_cost = Money::new(dec!(800.0), Currency::EUR);
        assert_eq!(unit_cost.multiply(Decimal::from(10u32)).amount(), dec!(8000.0));
    }

    #[test]
    fn test_divide_for_average_ticket() {
        let total = Money::new(dec!(300.00), Currency::EUR);
        let average = total.divide(dec!(4)).unwrap();
        assert_eq!(average.amount(), dec!(75.00));
    }

    #[test]
    fn test_divide_by_zero_is_rejected() {
        let total = Money::new(dec!(300.00), Currency::EUR);
        assert_eq!(total.divide(dec!(0)), Err(MoneyError::DivisionByZero));
    }

    #[test]
    fn test_checked_add_rejects_mixed_currencies() {
        let eur = Money::new(dec!(10.00), Currency::EUR);
        let brl = Money::new(dec!(10.00), Currency::BRL);

        assert!(matches!(
            eur.checked_add(&brl),
            Err(MoneyError::CurrencyMismatch(_, _))
        ));
    }

    #[test]
    fn test_negation() {
        let m = Money::new(dec!(50.00), Currency::EUR);
        assert_eq!((-m).amount(), dec!(-50.00));
    }
}

mod formatting {
    use super::*;

    #[test]
    fn test_display_uses_currency_symbol_and_places() {
        assert_eq!(Money::new(dec!(1850.0), Currency::EUR).to_string(), "€ 1850.00");
        assert_eq!(Money::new(dec!(1850), Currency::JPY).to_string(), "¥ 1850");
    }

    #[test]
    fn test_round_to_currency() {
        let m = Money::new(dec!(99.999), Currency::EUR).round_to_currency();
        assert_eq!(m.amount(), dec!(100.00));
    }
}
