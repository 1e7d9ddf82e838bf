//! Product handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use core_kernel::{Money, ProductId};
use domain_identity::TenantContext;
use infra_db::{ProductRepository, RestockOutcome, RestockReceipt};
use uuid::Uuid;
use validator::Validate;

use crate::dto::products::{ProductResponse, RegisterProductRequest, RestockRequest};
use crate::error::ApiError;
use crate::AppState;

/// Registers a new product for the tenant (stock starts at zero)
pub async fn register_product(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantContext>,
    Json(request): Json<RegisterProductRequest>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    request.validate()?;

    let repo = ProductRepository::new(state.pool.clone());
    let product = repo
        .register(&tenant, request.into_new_product(state.config.currency))
        .await?;

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// Lists the tenant's catalog
pub async fn list_products(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantContext>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let repo = ProductRepository::new(state.pool.clone());
    let products = repo.list(&tenant).await?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// Lists products at or under their replenishment threshold
pub async fn low_stock(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantContext>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let repo = ProductRepository::new(state.pool.clone());
    let products = repo.below_minimum(&tenant).await?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// Replenishes stock and books the cost-of-goods expense
pub async fn restock_product(
    State(state): State<AppState>,
    Extension(tenant): Extension<TenantContext>,
    Path(id): Path<Uuid>,
    Json(request): Json<RestockRequest>,
) -> Result<Json<RestockReceipt>, ApiError> {
    request.validate()?;

    let repo = ProductRepository::new(state.pool.clone());
    let unit_cost = Money::new(request.unit_cost, state.config.currency);

    match repo
        .restock(&tenant, ProductId::from_uuid(id), request.quantity, unit_cost)
        .await?
    {
        RestockOutcome::Completed(receipt) => Ok(Json(receipt)),
        RestockOutcome::UnknownProduct => Err(ApiError::NotFound(format!(
            "Product {} not found",
            id
        ))),
    }
}
