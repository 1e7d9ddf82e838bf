//! Property-Based Test Generators
//!
//! Proptest strategies for generating random test data that maintains
//! domain invariants.

use chrono::{DateTime, Duration, TimeZone, Utc};
use core_kernel::{CompanyId, Currency, Money, ProductId};
use domain_ledger::SaleKind;
use proptest::prelude::*;

/// Strategy for generating valid Currency values
pub fn currency_strategy() -> impl Strategy<Value = Currency> {
    prop_oneof![
        Just(Currency::EUR),
        Just(Currency::USD),
        Just(Currency::GBP),
        Just(Currency::BRL),
        Just(Currency::JPY),
    ]
}

/// Strategy for generating positive amounts in minor units
pub fn positive_amount_minor_strategy() -> impl Strategy<Value = i64> {
    1i64..1_000_000_000i64
}

/// Strategy for generating positive EUR Money values
pub fn eur_money_strategy() -> impl Strategy<Value = Money> {
    positive_amount_minor_strategy().prop_map(|amount| Money::from_minor(amount, Currency::EUR))
}

/// Strategy for generating Money in any supported currency
pub fn money_strategy() -> impl Strategy<Value = Money> {
    (positive_amount_minor_strategy(), currency_strategy())
        .prop_map(|(amount, currency)| Money::from_minor(amount, currency))
}

/// Strategy for generating sale quantities (1 to 99)
pub fn quantity_strategy() -> impl Strategy<Value = u32> {
    1u32..100u32
}

/// Strategy for generating stock levels (0 to 10_000)
pub fn stock_strategy() -> impl Strategy<Value = u32> {
    0u32..10_000u32
}

/// Strategy for generating sale kinds
pub fn sale_kind_strategy() -> impl Strategy<Value = SaleKind> {
    prop_oneof![Just(SaleKind::Retail), Just(SaleKind::Wholesale)]
}

/// Strategy for generating timestamps within 2026
pub fn timestamp_2026_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..365i64, 0i64..24i64).prop_map(|(days, hours)| {
        Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()
            + Duration::days(days)
            + Duration::hours(hours)
    })
}

/// Strategy for generating time ranges (start before end)
pub fn time_range_strategy() -> impl Strategy<Value = (DateTime<Utc>, DateTime<Utc>)> {
    (0i64..365i64, 1i64..365i64).prop_map(|(start_days, duration_days)| {
        let start = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap() + Duration::days(start_days);
        let end = start + Duration::days(duration_days);
        (start, end)
    })
}

/// Strategy for generating ProductId
pub fn product_id_strategy() -> impl Strategy<Value = ProductId> {
    any::<[u8; 16]>().prop_map(|bytes| ProductId::from_uuid(uuid::Uuid::from_bytes(bytes)))
}

/// Strategy for generating CompanyId
pub fn company_id_strategy() -> impl Strategy<Value = CompanyId> {
    any::<[u8; 16]>().prop_map(|bytes| CompanyId::from_uuid(uuid::Uuid::from_bytes(bytes)))
}

/// Strategy for generating SKUs
pub fn sku_strategy() -> impl Strategy<Value = String> {
    "[A-Z]{3}-[A-Z0-9]{2,5}".prop_map(|s| s)
}

/// Strategy for generating product names
pub fn product_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{2,10} [A-Z][a-z0-9]{1,6}".prop_map(|s| s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    proptest! {
        #[test]
        fn eur_money_is_always_positive(money in eur_money_strategy()) {
            prop_assert!(money.amount() > Decimal::ZERO);
            prop_assert_eq!(money.currency(), Currency::EUR);
        }

        #[test]
        fn quantities_fit_a_till(qty in quantity_strategy()) {
            prop_assert!(qty >= 1);
            prop_assert!(qty < 100);
        }

        #[test]
        fn time_ranges_are_ordered((start, end) in time_range_strategy()) {
            prop_assert!(start < end);
        }

        #[test]
        fn skus_match_the_catalog_shape(sku in sku_strategy()) {
            prop_assert!(sku.contains('-'));
        }
    }
}
