//! HTTP API Layer
//!
//! This crate provides the REST API for the retail ledger using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for checkout, catalog, and reporting
//! - **Middleware**: Authentication, tenancy, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(pool, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod auth;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{auth as auth_handlers, checkout, demo, finance, health, products};
use crate::middleware::{audit_middleware, auth_middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(pool: PgPool, config: ApiConfig) -> Router {
    let state = AppState { pool, config };

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/auth/login", post(auth_handlers::login))
        .route("/demo/setup", post(demo::setup_demo_data));

    // Catalog routes
    let product_routes = Router::new()
        .route("/", post(products::register_product))
        .route("/", get(products::list_products))
        .route("/low-stock", get(products::low_stock))
        .route("/:id/restock", post(products::restock_product));

    // Checkout routes
    let checkout_routes = Router::new().route("/", post(checkout::process_sale));

    // Reporting routes
    let finance_routes = Router::new()
        .route("/range", get(finance::financial_by_range))
        .route("/trailing", get(finance::trailing_financial))
        .route("/daily", get(finance::daily_sales))
        .route("/summary", get(finance::summary))
        .route("/expenses", post(finance::add_expense));

    // Protected API routes
    let api_routes = Router::new()
        .nest("/products", product_routes)
        .nest("/checkout", checkout_routes)
        .nest("/finance", finance_routes)
        .layer(axum_middleware::from_fn_with_state(state.clone(), audit_middleware))
        .layer(axum_middleware::from_fn_with_state(state.clone(), auth_middleware));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
