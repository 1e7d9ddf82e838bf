//! Product DTOs

use core_kernel::Money;
use domain_inventory::{NewProduct, Product};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        return Err(ValidationError::new("non_negative"));
    }
    Ok(())
}

fn default_category() -> String {
    "general".to_string()
}

/// Product registration request
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterProductRequest {
    #[validate(length(min = 1, max = 64))]
    pub sku: String,
    #[validate(length(min = 1, max = 128))]
    pub name: String,
    #[serde(default = "default_category")]
    #[validate(length(min = 1, max = 64))]
    pub category: String,
    #[validate(custom(function = non_negative))]
    pub price_retail: Decimal,
    #[validate(custom(function = non_negative))]
    pub price_wholesale: Decimal,
    #[serde(default)]
    pub stock_min: u32,
}

impl RegisterProductRequest {
    /// Converts the request into registration data in the store currency
    pub fn into_new_product(self, currency: core_kernel::Currency) -> NewProduct {
        NewProduct {
            sku: self.sku,
            name: self.name,
            category: self.category,
            price_retail: Money::new(self.price_retail, currency),
            price_wholesale: Money::new(self.price_wholesale, currency),
            stock_min: self.stock_min,
        }
    }
}

/// Restock request
#[derive(Debug, Deserialize, Validate)]
pub struct RestockRequest {
    #[validate(range(min = 1))]
    pub quantity: u32,
    #[validate(custom(function = non_negative))]
    pub unit_cost: Decimal,
}

/// Product as returned to the presentation layer
#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub price_retail: Decimal,
    pub price_wholesale: Decimal,
    pub currency: String,
    pub stock: u32,
    pub stock_min: u32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.as_uuid().to_string(),
            sku: product.sku,
            name: product.name,
            category: product.category,
            price_retail: product.price_retail.amount(),
            price_wholesale: product.price_wholesale.amount(),
            currency: product.price_retail.currency().code().to_string(),
            stock: product.stock,
            stock_min: product.stock_min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;
    use validator::Validate;

    fn request() -> RegisterProductRequest {
        RegisterProductRequest {
            sku: "IPH-15P".to_string(),
            name: "iPhone 15 Pro".to_string(),
            category: default_category(),
            price_retail: dec!(1200.0),
            price_wholesale: dec!(900.0),
            stock_min: 5,
        }
    }

    #[test]
    fn test_registration_request_validates() {
        assert!(request().validate().is_ok());

        let mut negative = request();
        negative.price_retail = dec!(-1.0);
        assert!(negative.validate().is_err());

        let mut unnamed = request();
        unnamed.name.clear();
        assert!(unnamed.validate().is_err());
    }

    #[test]
    fn test_into_new_product_applies_store_currency() {
        let new = request().into_new_product(Currency::EUR);
        assert_eq!(new.price_retail.currency(), Currency::EUR);
        assert_eq!(new.price_retail.amount(), dec!(1200.0));
    }
}
