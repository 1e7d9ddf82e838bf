//! Unit tests for strongly-typed identifiers

use core_kernel::{CompanyId, ExpenseId, ProductId, SaleId, UserId};
use uuid::Uuid;

#[test]
fn test_prefixes_are_distinct() {
    assert_eq!(CompanyId::prefix(), "CMP");
    assert_eq!(UserId::prefix(), "USR");
    assert_eq!(ProductId::prefix(), "PRD");
    assert_eq!(SaleId::prefix(), "SAL");
    assert_eq!(ExpenseId::prefix(), "EXP");
}

#[test]
fn test_display_round_trips_through_from_str() {
    let id = ExpenseId::new();
    let parsed: ExpenseId = id.to_string().parse().unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn test_bare_uuid_parses_without_prefix() {
    let uuid = Uuid::new_v4();
    let parsed: SaleId = uuid.to_string().parse().unwrap();
    assert_eq!(parsed, SaleId::from(uuid));
}

#[test]
fn test_well_known_tenant_ids() {
    let master = CompanyId::well_known(1);
    let demo = CompanyId::well_known(99);

    assert_ne!(master, demo);
    assert_eq!(*demo.as_uuid(), Uuid::from_u128(99));
}

#[test]
fn test_v7_ids_carry_the_version() {
    let id = SaleId::new_v7();
    assert_eq!(id.as_uuid().get_version_num(), 7);
}
