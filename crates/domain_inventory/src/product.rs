//! Product entity and stock movement
//!
//! # Invariants
//!
//! - Stock is never negative; a sale that would overdraw it is refused
//! - Registration always starts at zero stock (an initial restock follows)
//! - Sale and expense ledger entries never reach back into the product; only
//!   the stock counter is mutated in place

use chrono::{DateTime, Utc};
use core_kernel::{CompanyId, Money, ProductId};
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// A catalog product owned by one tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier
    pub id: ProductId,
    /// Stock-keeping unit / barcode
    pub sku: String,
    /// Display name
    pub name: String,
    /// Catalog category
    pub category: String,
    /// Price charged on retail sales
    pub price_retail: Money,
    /// Price charged on wholesale sales
    pub price_wholesale: Money,
    /// Units on hand
    pub stock: u32,
    /// Replenishment threshold
    pub stock_min: u32,
    /// Owning tenant
    pub company_id: CompanyId,
    /// When the product was registered
    pub created_at: DateTime<Utc>,
}

/// Registration data for a new product
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub price_retail: Money,
    pub price_wholesale: Money,
    pub stock_min: u32,
}

impl Product {
    /// Registers a new product with zero stock
    ///
    /// Stock intentionally starts at zero: the first restock records the
    /// acquisition cost in the expense ledger.
    pub fn register(id: ProductId, company_id: CompanyId, new: NewProduct) -> Self {
        Self {
            id,
            sku: new.sku,
            name: new.name,
            category: new.category,
            price_retail: new.price_retail,
            price_wholesale: new.price_wholesale,
            stock: 0,
            stock_min: new.stock_min,
            company_id,
            created_at: Utc::now(),
        }
    }

    /// Draws down stock for a sale
    ///
    /// # Errors
    ///
    /// Refuses without mutating when the requested quantity exceeds the
    /// units on hand, or when the quantity is zero.
    pub fn sell(&mut self, quantity: u32) -> Result<(), InventoryError> {
        if quantity == 0 {
            return Err(InventoryError::InvalidQuantity);
        }
        if quantity > self.stock {
            return Err(InventoryError::InsufficientStock {
                requested: quantity,
                available: self.stock,
            });
        }
        self.stock -= quantity;
        Ok(())
    }

    /// Adds received units to stock
    pub fn receive(&mut self, quantity: u32) {
        self.stock += quantity;
    }

    /// Returns true when the product is at or under its replenishment threshold
    pub fn is_below_minimum(&self) -> bool {
        self.stock <= self.stock_min
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use core_kernel::Currency;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn stocked(initial: u32) -> Product {
        let mut product = Product::register(
            ProductId::new(),
            CompanyId::new(),
            NewProduct {
                sku: "SKU".to_string(),
                name: "Widget".to_string(),
                category: "general".to_string(),
                price_retail: Money::new(dec!(10.0), Currency::EUR),
                price_wholesale: Money::new(dec!(7.0), Currency::EUR),
                stock_min: 5,
            },
        );
        product.receive(initial);
        product
    }

    proptest! {
        #[test]
        fn sell_never_leaves_negative_stock(initial in 0u32..1000u32, qty in 1u32..2000u32) {
            let mut product = stocked(initial);
            let before = product.stock;

            match product.sell(qty) {
                Ok(()) => prop_assert_eq!(product.stock, before - qty),
                Err(_) => prop_assert_eq!(product.stock, before),
            }
        }

        #[test]
        fn receive_is_additive(initial in 0u32..1000u32, qty in 0u32..1000u32) {
            let mut product = stocked(initial);
            product.receive(qty);
            prop_assert_eq!(product.stock, initial + qty);
        }
    }
}
