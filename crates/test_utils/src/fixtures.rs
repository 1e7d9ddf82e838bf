//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for common entities across the retail ledger.
//! Fixtures are consistent and predictable so assertions can use exact
//! values.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use core_kernel::{CompanyId, Currency, Money, ProductId, UserId};
use domain_identity::{Company, Role, TenantContext, User};
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;
use uuid::Uuid;

/// Argon2 hashing is deliberately slow; share one hash of the standard test
/// password across the whole test run.
pub static TEST_PASSWORD: &str = "test-password";
pub static TEST_PASSWORD_HASH: Lazy<String> =
    Lazy::new(|| domain_identity::hash_password(TEST_PASSWORD).expect("hash test password"));

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// The demo flagship retail price
    pub fn retail_1200() -> Money {
        Money::new(dec!(1200.0), Currency::EUR)
    }

    /// A wholesale unit cost
    pub fn cost_800() -> Money {
        Money::new(dec!(800.0), Currency::EUR)
    }

    /// The fixed monthly rent amount
    pub fn rent() -> Money {
        Money::new(dec!(2800.0), Currency::EUR)
    }

    /// A zero amount
    pub fn zero() -> Money {
        Money::zero(Currency::EUR)
    }

    /// An amount in a different currency for mismatch tests
    pub fn usd_100() -> Money {
        Money::new(dec!(100.00), Currency::USD)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Start of the standard reporting month (Jul 1, 2026)
    pub fn month_start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 7, 1, 0, 0, 0).unwrap()
    }

    /// End-of-month date picker value (midnight, pre-normalization)
    pub fn month_end_midnight() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 7, 31, 0, 0, 0).unwrap()
    }

    /// A mid-month sale timestamp
    pub fn mid_month() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 7, 15, 14, 30, 0).unwrap()
    }

    /// A timestamp before the reporting month
    pub fn before_month() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 20, 10, 0, 0).unwrap()
    }

    /// The demo anchor date (a Wednesday)
    pub fn demo_anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
    }
}

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Creates a deterministic company ID for testing
    pub fn company_id() -> CompanyId {
        CompanyId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap())
    }

    /// Creates a deterministic user ID for testing
    pub fn user_id() -> UserId {
        UserId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440002").unwrap())
    }

    /// Creates a deterministic product ID for testing
    pub fn product_id() -> ProductId {
        ProductId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440003").unwrap())
    }
}

/// Fixture for identity entities
pub struct IdentityFixtures;

impl IdentityFixtures {
    /// A tenant company with a deterministic id
    pub fn company() -> Company {
        Company::new(IdFixtures::company_id(), "Fixture Retail Ltd", "FIX-001")
    }

    /// A cashier user for the fixture company, password `test-password`
    pub fn cashier() -> User {
        User::new(
            IdFixtures::user_id(),
            "cashier",
            TEST_PASSWORD_HASH.clone(),
            Role::User,
            IdFixtures::company_id(),
        )
    }

    /// The tenant context the cashier acts under
    pub fn tenant() -> TenantContext {
        TenantContext::new(IdFixtures::company_id(), IdFixtures::user_id(), Role::User)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_ids_are_deterministic() {
        assert_eq!(IdFixtures::company_id(), IdFixtures::company_id());
        assert_eq!(IdentityFixtures::tenant().company_id(), IdFixtures::company_id());
    }

    #[test]
    fn test_cashier_password_verifies() {
        let cashier = IdentityFixtures::cashier();
        assert!(cashier.verify_password(TEST_PASSWORD).unwrap());
    }
}
