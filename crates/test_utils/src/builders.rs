//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the relevant fields and let defaults (some of them
//! faked) cover the rest.

use chrono::{DateTime, Utc};
use core_kernel::{CompanyId, Currency, Money, ProductId, UserId};
use domain_inventory::{NewProduct, Product};
use domain_ledger::{Expense, Sale, SaleKind};
use fake::faker::lorem::en::Word;
use fake::Fake;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::fixtures::IdFixtures;

/// Builder for catalog products
pub struct TestProductBuilder {
    company_id: CompanyId,
    sku: String,
    name: String,
    category: String,
    price_retail: Money,
    price_wholesale: Money,
    stock_min: u32,
    stock: u32,
}

impl Default for TestProductBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProductBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        let word: String = Word().fake();
        Self {
            company_id: IdFixtures::company_id(),
            sku: format!("SKU-{}", word.to_uppercase()),
            name: format!("Test {}", word),
            category: "general".to_string(),
            price_retail: Money::new(dec!(100.0), Currency::EUR),
            price_wholesale: Money::new(dec!(70.0), Currency::EUR),
            stock_min: 5,
            stock: 0,
        }
    }

    /// Sets the owning tenant
    pub fn with_company(mut self, company_id: CompanyId) -> Self {
        self.company_id = company_id;
        self
    }

    /// Sets the SKU
    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = sku.into();
        self
    }

    /// Sets the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the retail price
    pub fn with_retail_price(mut self, price: Money) -> Self {
        self.price_retail = price;
        self
    }

    /// Sets the wholesale price
    pub fn with_wholesale_price(mut self, price: Money) -> Self {
        self.price_wholesale = price;
        self
    }

    /// Sets the replenishment threshold
    pub fn with_stock_min(mut self, stock_min: u32) -> Self {
        self.stock_min = stock_min;
        self
    }

    /// Sets the initial units on hand
    pub fn with_stock(mut self, stock: u32) -> Self {
        self.stock = stock;
        self
    }

    /// Builds the registration data only
    pub fn build_new(self) -> NewProduct {
        NewProduct {
            sku: self.sku,
            name: self.name,
            category: self.category,
            price_retail: self.price_retail,
            price_wholesale: self.price_wholesale,
            stock_min: self.stock_min,
        }
    }

    /// Builds a registered product, received into stock if requested
    pub fn build(self) -> Product {
        let company_id = self.company_id;
        let stock = self.stock;
        let mut product = Product::register(ProductId::new(), company_id, self.build_new());
        if stock > 0 {
            product.receive(stock);
        }
        product
    }
}

/// Builder for sale ledger entries
pub struct TestSaleBuilder {
    product_id: ProductId,
    quantity: u32,
    price: Money,
    kind: SaleKind,
    occurred_at: DateTime<Utc>,
    user_id: UserId,
    company_id: CompanyId,
}

impl Default for TestSaleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSaleBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            product_id: IdFixtures::product_id(),
            quantity: 1,
            price: Money::new(dec!(100.0), Currency::EUR),
            kind: SaleKind::Retail,
            occurred_at: Utc::now(),
            user_id: IdFixtures::user_id(),
            company_id: IdFixtures::company_id(),
        }
    }

    /// Sets the quantity sold
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Sets the captured unit price
    pub fn with_price(mut self, price: Money) -> Self {
        self.price = price;
        self
    }

    /// Sets the sale kind
    pub fn with_kind(mut self, kind: SaleKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the sale timestamp
    pub fn occurred_at(mut self, when: DateTime<Utc>) -> Self {
        self.occurred_at = when;
        self
    }

    /// Builds the sale entry
    pub fn build(self) -> Sale {
        Sale::record(
            self.product_id,
            self.quantity,
            self.price,
            self.kind,
            self.occurred_at,
            self.user_id,
            self.company_id,
        )
    }
}

/// Builder for expense ledger entries
pub struct TestExpenseBuilder {
    description: String,
    amount: Money,
    category: String,
    occurred_at: DateTime<Utc>,
    company_id: CompanyId,
}

impl Default for TestExpenseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestExpenseBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            description: "Test expense".to_string(),
            amount: Money::new(dec!(50.0), Currency::EUR),
            category: "Misc".to_string(),
            occurred_at: Utc::now(),
            company_id: IdFixtures::company_id(),
        }
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the amount
    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the expense timestamp
    pub fn occurred_at(mut self, when: DateTime<Utc>) -> Self {
        self.occurred_at = when;
        self
    }

    /// Builds the expense entry
    pub fn build(self) -> Expense {
        Expense::record(
            self.description,
            self.amount,
            self.category,
            self.occurred_at,
            self.company_id,
        )
    }
}

/// Produces a decimal price in whole cents, convenient for exact assertions
pub fn price(units: i64, cents: u32) -> Decimal {
    Decimal::new(units * 100 + cents as i64, 2)
}
