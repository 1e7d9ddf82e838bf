//! Unit tests for the inventory domain

use core_kernel::{CompanyId, Currency, Money, ProductId};
use domain_inventory::{InventoryError, NewProduct, Product};
use rust_decimal_macros::dec;

fn airpods(company: CompanyId) -> Product {
    Product::register(
        ProductId::new(),
        company,
        NewProduct {
            sku: "AIR-MAX".to_string(),
            name: "AirPods Max".to_string(),
            category: "general".to_string(),
            price_retail: Money::new(dec!(540.0), Currency::EUR),
            price_wholesale: Money::new(dec!(380.0), Currency::EUR),
            stock_min: 5,
        },
    )
}

#[test]
fn test_full_stock_lifecycle() {
    let mut product = airpods(CompanyId::new());

    // Fresh registrations carry no stock until the first replenishment.
    assert_eq!(product.stock, 0);
    assert!(matches!(
        product.sell(1),
        Err(InventoryError::InsufficientStock { available: 0, .. })
    ));

    product.receive(40);
    product.sell(3).unwrap();
    assert_eq!(product.stock, 37);
}

#[test]
fn test_refused_sale_is_a_value_not_a_panic() {
    let mut product = airpods(CompanyId::new());
    product.receive(2);

    let err = product.sell(3).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Insufficient stock: requested 3, available 2"
    );
}

#[test]
fn test_threshold_tracks_stock_level() {
    let mut product = airpods(CompanyId::new());
    product.receive(6);
    assert!(!product.is_below_minimum());

    product.sell(1).unwrap();
    assert!(product.is_below_minimum());
}

#[test]
fn test_product_keeps_its_tenant() {
    let company = CompanyId::well_known(99);
    let product = airpods(company);
    assert_eq!(product.company_id, company);
}
