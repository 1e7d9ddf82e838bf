//! Sales repository implementation
//!
//! Owns the checkout transaction: the stock decrement and the sale insert
//! commit together, and a declined sale leaves no trace.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;
use std::fmt;

use core_kernel::{Currency, Money, ProductId, SaleId};
use domain_identity::TenantContext;
use domain_ledger::{Sale, SaleKind};

use crate::error::DatabaseError;

/// Repository for recording sales against stock
#[derive(Debug, Clone)]
pub struct SalesRepository {
    pool: PgPool,
}

/// Sale kind as stored in the `sale_kind` Postgres enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "sale_kind")]
enum SaleKindColumn {
    #[sqlx(rename = "varejo")]
    Varejo,
    #[sqlx(rename = "atacado")]
    Atacado,
}

impl From<SaleKind> for SaleKindColumn {
    fn from(kind: SaleKind) -> Self {
        match kind {
            SaleKind::Retail => SaleKindColumn::Varejo,
            SaleKind::Wholesale => SaleKindColumn::Atacado,
        }
    }
}

/// Result of a checkout request
///
/// Declines are expected business conditions, not errors: the caller shows
/// the message to the cashier and nothing is written. Database failures
/// surface as `Err` instead.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SaleOutcome {
    Completed(SaleReceipt),
    Declined { reason: DeclineReason },
}

/// Why a sale was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclineReason {
    /// The product does not exist for this tenant
    UnknownProduct,
    /// Fewer units on hand than requested
    OutOfStock,
}

impl DeclineReason {
    /// Human-readable reason surfaced to the cashier
    pub fn message(&self) -> &'static str {
        match self {
            DeclineReason::UnknownProduct => "unknown product",
            DeclineReason::OutOfStock => "out of stock",
        }
    }
}

impl fmt::Display for DeclineReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// What a completed sale wrote
#[derive(Debug, Clone, Serialize)]
pub struct SaleReceipt {
    pub sale_id: SaleId,
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    /// Unit price captured at sale time
    pub price: Money,
    pub kind: SaleKind,
    pub remaining_stock: u32,
}

#[derive(Debug, sqlx::FromRow)]
struct CheckoutProductRow {
    name: String,
    price_retail: Decimal,
    currency: String,
}

impl SalesRepository {
    /// Creates a new SalesRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Processes a sale: draws down stock and appends the ledger entry
    ///
    /// The sale captures the product's current retail price as its unit
    /// price. The decrement is guarded (`stock >= quantity` inside the
    /// UPDATE), so two concurrent checkouts can never drive stock negative;
    /// the slower one is declined instead.
    pub async fn process_sale(
        &self,
        tenant: &TenantContext,
        product_id: ProductId,
        quantity: u32,
        kind: SaleKind,
    ) -> Result<SaleOutcome, DatabaseError> {
        if quantity == 0 {
            return Err(DatabaseError::ConstraintViolation(
                "quantity must be at least 1".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await?;

        let product = sqlx::query_as::<_, CheckoutProductRow>(
            r#"
            SELECT name, price_retail, currency
            FROM products
            WHERE product_id = $1 AND company_id = $2
            "#,
        )
        .bind(product_id.as_uuid())
        .bind(tenant.company_id().as_uuid())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(product) = product else {
            return Ok(SaleOutcome::Declined {
                reason: DeclineReason::UnknownProduct,
            });
        };

        let remaining: Option<i32> = sqlx::query_scalar(
            r#"
            UPDATE products
            SET stock = stock - $1
            WHERE product_id = $2 AND company_id = $3 AND stock >= $1
            RETURNING stock
            "#,
        )
        .bind(quantity as i32)
        .bind(product_id.as_uuid())
        .bind(tenant.company_id().as_uuid())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(remaining) = remaining else {
            // Nothing was written; dropping the transaction rolls it back.
            return Ok(SaleOutcome::Declined {
                reason: DeclineReason::OutOfStock,
            });
        };

        let currency = Currency::from_code(&product.currency)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;
        let captured_price = Money::new(product.price_retail, currency);

        let sale = Sale::record(
            product_id,
            quantity,
            captured_price,
            kind,
            Utc::now(),
            tenant.user_id(),
            tenant.company_id(),
        );

        sqlx::query(
            r#"
            INSERT INTO sales (
                sale_id, product_id, quantity, price, currency, kind,
                occurred_at, user_id, company_id
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(sale.id.as_uuid())
        .bind(sale.product_id.as_uuid())
        .bind(sale.quantity as i32)
        .bind(sale.price.amount())
        .bind(sale.price.currency().code())
        .bind(SaleKindColumn::from(sale.kind))
        .bind(sale.occurred_at)
        .bind(sale.user_id.as_uuid())
        .bind(sale.company_id.as_uuid())
        .execute(&mut *tx)
        .await?;

        tx.commit()
            .await
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;

        let remaining_stock = u32::try_from(remaining)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;

        Ok(SaleOutcome::Completed(SaleReceipt {
            sale_id: sale.id,
            product_id,
            product_name: product.name,
            quantity,
            price: captured_price,
            kind,
            remaining_stock,
        }))
    }

    /// Counts the tenant's sale entries
    ///
    /// The ledger is append-only, so outside the demo reset this only grows.
    pub async fn count(&self, tenant: &TenantContext) -> Result<i64, DatabaseError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM sales WHERE company_id = $1
            "#,
        )
        .bind(tenant.company_id().as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decline_messages() {
        assert_eq!(DeclineReason::OutOfStock.to_string(), "out of stock");
        assert_eq!(DeclineReason::UnknownProduct.to_string(), "unknown product");
    }
}
