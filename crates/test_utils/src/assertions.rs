//! Custom Test Assertions
//!
//! Specialized assertion helpers for domain types that give more meaningful
//! error messages than standard assertions.

use core_kernel::{Money, ReportRange};
use domain_inventory::Product;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Asserts that two Money values are approximately equal within a tolerance
///
/// # Panics
///
/// Panics if the currencies don't match or the amounts differ by more than
/// the tolerance
pub fn assert_money_approx_eq(actual: &Money, expected: &Money, tolerance: Decimal) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );

    let diff = (actual.amount() - expected.amount()).abs();
    assert!(
        diff <= tolerance,
        "Money amounts differ by more than tolerance: actual={}, expected={}, diff={}, tolerance={}",
        actual.amount(),
        expected.amount(),
        diff,
        tolerance
    );
}

/// Asserts that a Money value is positive
pub fn assert_money_positive(money: &Money) {
    assert!(
        money.is_positive(),
        "Expected positive money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(
        money.is_zero(),
        "Expected zero money, got {} {}",
        money.currency().symbol(),
        money.amount()
    );
}

/// Asserts that money values sum to a total
pub fn assert_money_sum_equals(parts: &[Money], total: &Money) {
    let sum = parts.iter().fold(Money::zero(total.currency()), |acc, m| {
        acc.checked_add(m).expect("Currency mismatch in sum")
    });

    assert_eq!(
        sum.amount(),
        total.amount(),
        "Sum of parts ({}) doesn't equal total ({})",
        sum.amount(),
        total.amount()
    );
}

/// Asserts that a ReportRange contains a specific timestamp
pub fn assert_range_contains(range: &ReportRange, timestamp: chrono::DateTime<chrono::Utc>) {
    assert!(
        range.contains(timestamp),
        "Range {:?} does not contain timestamp {}",
        range,
        timestamp
    );
}

/// Asserts that a ReportRange does not contain a specific timestamp
pub fn assert_range_excludes(range: &ReportRange, timestamp: chrono::DateTime<chrono::Utc>) {
    assert!(
        !range.contains(timestamp),
        "Range {:?} unexpectedly contains timestamp {}",
        range,
        timestamp
    );
}

/// Asserts that a product's stock sits at an exact level
pub fn assert_stock(product: &Product, expected: u32) {
    assert_eq!(
        product.stock, expected,
        "Product '{}' stock is {}, expected {}",
        product.name, product.stock, expected
    );
}

/// Asserts that a decimal value is within a range
pub fn assert_decimal_in_range(value: Decimal, min: Decimal, max: Decimal) {
    assert!(
        value >= min && value <= max,
        "Decimal {} is not in range [{}, {}]",
        value,
        min,
        max
    );
}

/// Asserts that a result is Ok and returns the value
#[macro_export]
macro_rules! assert_ok {
    ($result:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
    ($result:expr, $msg:expr) => {
        match $result {
            Ok(value) => value,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Asserts that a result is Err and returns the error
#[macro_export]
macro_rules! assert_err {
    ($result:expr) => {
        match $result {
            Ok(value) => panic!("Expected Err, got Ok: {:?}", value),
            Err(e) => e,
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use core_kernel::Currency;

    #[test]
    fn test_assert_money_approx_eq_passes() {
        let m1 = Money::new(dec!(100.001), Currency::EUR);
        let m2 = Money::new(dec!(100.002), Currency::EUR);
        assert_money_approx_eq(&m1, &m2, dec!(0.01));
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_assert_money_approx_eq_currency_mismatch() {
        let m1 = Money::new(dec!(100.00), Currency::EUR);
        let m2 = Money::new(dec!(100.00), Currency::USD);
        assert_money_approx_eq(&m1, &m2, dec!(0.01));
    }

    #[test]
    fn test_assert_money_sum_equals() {
        let parts = vec![
            Money::new(dec!(33.34), Currency::EUR),
            Money::new(dec!(33.33), Currency::EUR),
            Money::new(dec!(33.33), Currency::EUR),
        ];
        let total = Money::new(dec!(100.00), Currency::EUR);
        assert_money_sum_equals(&parts, &total);
    }

    #[test]
    fn test_assert_range_contains() {
        let start = Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2026, 7, 31, 0, 0, 0).unwrap();
        let range = ReportRange::new(start, end).unwrap();

        assert_range_contains(&range, Utc.with_ymd_and_hms(2026, 7, 15, 12, 0, 0).unwrap());
        assert_range_excludes(&range, Utc.with_ymd_and_hms(2026, 8, 2, 12, 0, 0).unwrap());
    }
}
