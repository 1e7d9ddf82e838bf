//! Product repository implementation
//!
//! Catalog queries plus the restock operation, which pairs the stock
//! increment with its auto-generated cost-of-goods expense in a single
//! transaction.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;

use core_kernel::{CompanyId, Currency, ExpenseId, Money, ProductId};
use domain_identity::TenantContext;
use domain_inventory::{NewProduct, Product};
use domain_ledger::Expense;

use crate::error::DatabaseError;

/// Repository for catalog products and stock replenishment
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: PgPool,
}

#[derive(Debug, Clone, sqlx::FromRow)]
struct ProductRow {
    product_id: Uuid,
    sku: String,
    name: String,
    category: String,
    price_retail: Decimal,
    price_wholesale: Decimal,
    currency: String,
    stock: i32,
    stock_min: i32,
    company_id: Uuid,
    created_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = DatabaseError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let currency = Currency::from_code(&row.currency)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;
        let stock = u32::try_from(row.stock)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;
        let stock_min = u32::try_from(row.stock_min)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;

        Ok(Product {
            id: ProductId::from_uuid(row.product_id),
            sku: row.sku,
            name: row.name,
            category: row.category,
            price_retail: Money::new(row.price_retail, currency),
            price_wholesale: Money::new(row.price_wholesale, currency),
            stock,
            stock_min,
            company_id: CompanyId::from_uuid(row.company_id),
            created_at: row.created_at,
        })
    }
}

const PRODUCT_COLUMNS: &str = r#"
    product_id, sku, name, category, price_retail, price_wholesale,
    currency, stock, stock_min, company_id, created_at
"#;

/// Result of a restock request
///
/// Only a missing product declines the operation; every other path either
/// completes or fails the call with a database error.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RestockOutcome {
    Completed(RestockReceipt),
    UnknownProduct,
}

/// What a completed restock wrote
#[derive(Debug, Clone, Serialize)]
pub struct RestockReceipt {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: u32,
    pub new_stock: u32,
    pub total_cost: Money,
    pub expense_id: ExpenseId,
}

#[derive(Debug, sqlx::FromRow)]
struct RestockRow {
    name: String,
    stock: i32,
}

impl ProductRepository {
    /// Creates a new ProductRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Registers a new product for the tenant, starting at zero stock
    pub async fn register(
        &self,
        tenant: &TenantContext,
        new: NewProduct,
    ) -> Result<Product, DatabaseError> {
        if new.price_retail.currency() != new.price_wholesale.currency() {
            return Err(DatabaseError::ConstraintViolation(
                "product prices must share a currency".to_string(),
            ));
        }

        let product = Product::register(ProductId::new_v7(), tenant.company_id(), new);

        sqlx::query(
            r#"
            INSERT INTO products (
                product_id, sku, name, category, price_retail, price_wholesale,
                currency, stock, stock_min, company_id, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(product.id.as_uuid())
        .bind(&product.sku)
        .bind(&product.name)
        .bind(&product.category)
        .bind(product.price_retail.amount())
        .bind(product.price_wholesale.amount())
        .bind(product.price_retail.currency().code())
        .bind(product.stock as i32)
        .bind(product.stock_min as i32)
        .bind(product.company_id.as_uuid())
        .bind(product.created_at)
        .execute(&self.pool)
        .await?;

        Ok(product)
    }

    /// Lists the tenant's catalog, alphabetically
    pub async fn list(&self, tenant: &TenantContext) -> Result<Vec<Product>, DatabaseError> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products
            WHERE company_id = $1
            ORDER BY name
            "#
        ))
        .bind(tenant.company_id().as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    /// Retrieves one product of the tenant
    pub async fn get(
        &self,
        tenant: &TenantContext,
        product_id: ProductId,
    ) -> Result<Option<Product>, DatabaseError> {
        let row = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products
            WHERE product_id = $1 AND company_id = $2
            "#
        ))
        .bind(product_id.as_uuid())
        .bind(tenant.company_id().as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Product::try_from).transpose()
    }

    /// Lists products at or under their replenishment threshold
    pub async fn below_minimum(
        &self,
        tenant: &TenantContext,
    ) -> Result<Vec<Product>, DatabaseError> {
        let rows = sqlx::query_as::<_, ProductRow>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products
            WHERE company_id = $1 AND stock <= stock_min
            ORDER BY name
            "#
        ))
        .bind(tenant.company_id().as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Product::try_from).collect()
    }

    /// Replenishes stock and books the acquisition cost as an expense
    ///
    /// Both writes happen in one transaction: the stock increment and the
    /// cost-of-goods expense commit together or not at all.
    pub async fn restock(
        &self,
        tenant: &TenantContext,
        product_id: ProductId,
        quantity: u32,
        unit_cost: Money,
    ) -> Result<RestockOutcome, DatabaseError> {
        if unit_cost.is_negative() {
            return Err(DatabaseError::ConstraintViolation(
                "unit cost must not be negative".to_string(),
            ));
        }

        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query_as::<_, RestockRow>(
            r#"
            UPDATE products
            SET stock = stock + $1
            WHERE product_id = $2 AND company_id = $3
            RETURNING name, stock
            "#,
        )
        .bind(quantity as i32)
        .bind(product_id.as_uuid())
        .bind(tenant.company_id().as_uuid())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = updated else {
            // Nothing was written; dropping the transaction rolls it back.
            return Ok(RestockOutcome::UnknownProduct);
        };

        let expense = Expense::cost_of_goods(
            &row.name,
            quantity,
            unit_cost,
            Utc::now(),
            tenant.company_id(),
        );

        sqlx::query(
            r#"
            INSERT INTO expenses (expense_id, description, amount, currency, category, occurred_at, company_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(expense.id.as_uuid())
        .bind(&expense.description)
        .bind(expense.amount.amount())
        .bind(expense.amount.currency().code())
        .bind(&expense.category)
        .bind(expense.occurred_at)
        .bind(expense.company_id.as_uuid())
        .execute(&mut *tx)
        .await?;

        tx.commit()
            .await
            .map_err(|e| DatabaseError::TransactionFailed(e.to_string()))?;

        let new_stock = u32::try_from(row.stock)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;

        Ok(RestockOutcome::Completed(RestockReceipt {
            product_id,
            product_name: row.name,
            quantity,
            new_stock,
            total_cost: expense.amount,
            expense_id: expense.id,
        }))
    }
}
