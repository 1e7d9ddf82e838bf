//! Reporting repository implementation
//!
//! Read-only financial views: range-filtered sales and expenses, the daily
//! sales series, and the period summary handed to the PDF exporter.
//!
//! Query failures propagate as errors from here; the presentation layer is
//! the place that degrades to an empty "no data" view, so connectivity
//! problems stay visible in the logs instead of being silently masked.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::PgPool;

use core_kernel::{Currency, Money, ReportRange};
use domain_identity::TenantContext;
use domain_ledger::{DailySalesPoint, ExpenseLine, FinancialSummary, SaleLine};

use crate::error::DatabaseError;

/// Repository for date-ranged financial aggregation
#[derive(Debug, Clone)]
pub struct ReportingRepository {
    pool: PgPool,
}

/// Range-filtered sales and expenses, ready for display
#[derive(Debug, Clone, Serialize)]
pub struct RangeReport {
    pub sales: Vec<SaleLine>,
    pub expenses: Vec<ExpenseLine>,
}

#[derive(Debug, sqlx::FromRow)]
struct SaleLineRow {
    occurred_at: DateTime<Utc>,
    product_name: String,
    quantity: i32,
    price: Decimal,
    currency: String,
    kind: String,
}

impl TryFrom<SaleLineRow> for SaleLine {
    type Error = DatabaseError;

    fn try_from(row: SaleLineRow) -> Result<Self, Self::Error> {
        let currency = Currency::from_code(&row.currency)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;
        let kind = row
            .kind
            .parse()
            .map_err(|e: domain_ledger::LedgerError| {
                DatabaseError::SerializationError(e.to_string())
            })?;
        let quantity = u32::try_from(row.quantity)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;

        Ok(SaleLine {
            occurred_at: row.occurred_at,
            product_name: row.product_name,
            quantity,
            price: Money::new(row.price, currency),
            kind,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct ExpenseLineRow {
    occurred_at: DateTime<Utc>,
    description: String,
    category: String,
    amount: Decimal,
    currency: String,
}

impl TryFrom<ExpenseLineRow> for ExpenseLine {
    type Error = DatabaseError;

    fn try_from(row: ExpenseLineRow) -> Result<Self, Self::Error> {
        let currency = Currency::from_code(&row.currency)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;

        Ok(ExpenseLine {
            occurred_at: row.occurred_at,
            description: row.description,
            category: row.category,
            amount: Money::new(row.amount, currency),
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct DailyTotalRow {
    date: NaiveDate,
    total: Decimal,
    currency: String,
}

impl TryFrom<DailyTotalRow> for DailySalesPoint {
    type Error = DatabaseError;

    fn try_from(row: DailyTotalRow) -> Result<Self, Self::Error> {
        let currency = Currency::from_code(&row.currency)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))?;

        Ok(DailySalesPoint {
            date: row.date,
            total: Money::new(row.total, currency),
        })
    }
}

impl ReportingRepository {
    /// Creates a new ReportingRepository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns the tenant's sales (joined with product names) and expenses
    /// within the inclusive range
    pub async fn financial_by_range(
        &self,
        tenant: &TenantContext,
        range: ReportRange,
    ) -> Result<RangeReport, DatabaseError> {
        let sale_rows = sqlx::query_as::<_, SaleLineRow>(
            r#"
            SELECT s.occurred_at, p.name AS product_name, s.quantity,
                   s.price, s.currency, s.kind::TEXT AS kind
            FROM sales s
            JOIN products p ON p.product_id = s.product_id
            WHERE s.company_id = $1
              AND s.occurred_at >= $2
              AND s.occurred_at <= $3
            ORDER BY s.occurred_at
            "#,
        )
        .bind(tenant.company_id().as_uuid())
        .bind(range.start())
        .bind(range.end())
        .fetch_all(&self.pool)
        .await?;

        let expense_rows = sqlx::query_as::<_, ExpenseLineRow>(
            r#"
            SELECT occurred_at, description, category, amount, currency
            FROM expenses
            WHERE company_id = $1
              AND occurred_at >= $2
              AND occurred_at <= $3
            ORDER BY occurred_at
            "#,
        )
        .bind(tenant.company_id().as_uuid())
        .bind(range.start())
        .bind(range.end())
        .fetch_all(&self.pool)
        .await?;

        Ok(RangeReport {
            sales: sale_rows
                .into_iter()
                .map(SaleLine::try_from)
                .collect::<Result<_, _>>()?,
            expenses: expense_rows
                .into_iter()
                .map(ExpenseLine::try_from)
                .collect::<Result<_, _>>()?,
        })
    }

    /// Convenience view over the trailing N-day window ending now
    pub async fn trailing_financial(
        &self,
        tenant: &TenantContext,
        days: i64,
    ) -> Result<RangeReport, DatabaseError> {
        let range = ReportRange::trailing_days(Utc::now(), days);
        self.financial_by_range(tenant, range).await
    }

    /// Sale amount bucketed per calendar date over the trailing N days,
    /// oldest date first
    pub async fn daily_sales(
        &self,
        tenant: &TenantContext,
        days: i64,
    ) -> Result<Vec<DailySalesPoint>, DatabaseError> {
        let start = Utc::now() - chrono::Duration::days(days);

        let rows = sqlx::query_as::<_, DailyTotalRow>(
            r#"
            SELECT (occurred_at AT TIME ZONE 'UTC')::date AS date,
                   SUM(price) AS total,
                   MIN(currency) AS currency
            FROM sales
            WHERE company_id = $1 AND occurred_at >= $2
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .bind(tenant.company_id().as_uuid())
        .bind(start)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(DailySalesPoint::try_from).collect()
    }

    /// Period aggregates for the dashboard cards and the PDF exporter
    pub async fn summary(
        &self,
        tenant: &TenantContext,
        range: ReportRange,
        currency: Currency,
    ) -> Result<FinancialSummary, DatabaseError> {
        let report = self.financial_by_range(tenant, range).await?;

        FinancialSummary::from_lines(range.label(), currency, &report.sales, &report.expenses)
            .map_err(|e| DatabaseError::SerializationError(e.to_string()))
    }
}
