//! Financial reporting handlers
//!
//! Reporting views degrade gracefully: when the aggregation query fails the
//! handler logs the failure and answers with empty structured results, so
//! the reporting UI renders a "no data" state instead of an error page.
//! Mutations (expense entry) do NOT degrade; their failures surface.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Extension, Json,
};
use chrono::Utc;
use core_kernel::Money;
use domain_identity::TenantContext;
use domain_ledger::{DailySalesPoint, Expense, FinancialSummary};
use infra_db::{ExpenseRepository, RangeReport, ReportingRepository};
use validator::Validate;

use crate::dto::finance::{AddExpenseRequest, RangeQuery, TrailingQuery};
use crate::error::ApiError;
use crate::AppState;

fn empty_report() -> RangeReport {
    RangeReport {
        sales: Vec::new(),
        expenses: Vec::new(),
    }
}

/// Sales and expenses within an inclusive date range
pub async fn financial_by_range(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantContext>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<RangeReport>, ApiError> {
    let range = query
        .to_report_range()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let repo = ReportingRepository::new(state.pool.clone());
    match repo.financial_by_range(&tenant, range).await {
        Ok(report) => Ok(Json(report)),
        Err(e) => {
            tracing::warn!("Range report failed, returning empty view: {}", e);
            Ok(Json(empty_report()))
        }
    }
}

/// Sales and expenses over the trailing N days (default 30)
pub async fn trailing_financial(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantContext>,
    Query(query): Query<TrailingQuery>,
) -> Result<Json<RangeReport>, ApiError> {
    let repo = ReportingRepository::new(state.pool.clone());
    match repo.trailing_financial(&tenant, query.days_or_default()).await {
        Ok(report) => Ok(Json(report)),
        Err(e) => {
            tracing::warn!("Trailing report failed, returning empty view: {}", e);
            Ok(Json(empty_report()))
        }
    }
}

/// Sale amount per calendar date over the trailing N days (default 30)
pub async fn daily_sales(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantContext>,
    Query(query): Query<TrailingQuery>,
) -> Result<Json<Vec<DailySalesPoint>>, ApiError> {
    let repo = ReportingRepository::new(state.pool.clone());
    match repo.daily_sales(&tenant, query.days_or_default()).await {
        Ok(series) => Ok(Json(series)),
        Err(e) => {
            tracing::warn!("Daily series failed, returning empty view: {}", e);
            Ok(Json(Vec::new()))
        }
    }
}

/// Period aggregates for the dashboard cards and the PDF exporter
pub async fn summary(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantContext>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<FinancialSummary>, ApiError> {
    let range = query
        .to_report_range()
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let repo = ReportingRepository::new(state.pool.clone());
    match repo.summary(&tenant, range, state.config.currency).await {
        Ok(summary) => Ok(Json(summary)),
        Err(e) => {
            tracing::warn!("Summary failed, returning empty view: {}", e);
            let empty = FinancialSummary::from_lines(
                range.label(),
                state.config.currency,
                &[],
                &[],
            )
            .map_err(|e| ApiError::Internal(e.to_string()))?;
            Ok(Json(empty))
        }
    }
}

/// Appends a directly-entered expense to the ledger
pub async fn add_expense(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantContext>,
    Json(request): Json<AddExpenseRequest>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    request.validate()?;

    let repo = ExpenseRepository::new(state.pool.clone());
    let expense = repo
        .add(
            &tenant,
            &request.description,
            Money::new(request.amount, state.config.currency),
            &request.category,
            request.occurred_at.unwrap_or_else(Utc::now),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(expense)))
}
