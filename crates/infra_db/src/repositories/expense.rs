//! Expense repository implementation
//!
//! Direct expense entry (rent, marketing, taxes). Restock-generated
//! cost-of-goods expenses are written by the product repository inside the
//! restock transaction.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use core_kernel::Money;
use domain_identity::TenantContext;
use domain_ledger::Expense;

use crate::error::DatabaseError;

/// Repository for directly-entered expenses
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    pool: PgPool,
}

impl ExpenseRepository {
    /// Creates a new ExpenseRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Appends an expense to the tenant's ledger
    pub async fn add(
        &self,
        tenant: &TenantContext,
        description: &str,
        amount: Money,
        category: &str,
        occurred_at: DateTime<Utc>,
    ) -> Result<Expense, DatabaseError> {
        if amount.is_negative() {
            return Err(DatabaseError::ConstraintViolation(
                "expense amount must not be negative".to_string(),
            ));
        }

        let expense = Expense::record(
            description,
            amount,
            category,
            occurred_at,
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
        .execute(&self.pool)
        .await?;

        Ok(expense)
    }

    /// Counts the tenant's expense entries
    pub async fn count(&self, tenant: &TenantContext) -> Result<i64, DatabaseError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM expenses WHERE company_id = $1
            "#,
        )
        .bind(tenant.company_id().as_uuid())
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
