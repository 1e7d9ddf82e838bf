//! Checkout handlers

use axum::{extract::State, Extension, Json};
use core_kernel::ProductId;
use domain_identity::TenantContext;
use infra_db::SalesRepository;
use validator::Validate;

use crate::dto::checkout::{CheckoutRequest, CheckoutResponse};
use crate::error::ApiError;
use crate::AppState;

/// Processes a sale against stock
///
/// A decline (unknown product, insufficient stock) is a normal response
/// with `success: false`; the stock and the ledger stay untouched.
pub async fn process_sale(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantContext>,
    Json(request): Json<CheckoutRequest>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    request.validate()?;

    let repo = SalesRepository::new(state.pool.clone());
    let outcome = repo
        .process_sale(
            &tenant,
            ProductId::from_uuid(request.product_id),
            request.quantity,
            request.kind,
        )
        .await?;

    Ok(Json(outcome.into()))
}
