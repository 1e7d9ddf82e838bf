//! Demo data handlers

use axum::{extract::State, Json};
use chrono::Utc;
use domain_identity::Company;
use infra_db::{demo::DEMO_USERNAME, DemoDataSeeder, DemoPlan};
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::AppState;

/// Seeds (or re-seeds) the demo tenant with a month of trading history
///
/// Idempotent in structure: the demo company, cashier, and catalog are only
/// created when absent, while the synthetic ledger is replaced on each run.
pub async fn setup_demo_data(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let plan = DemoPlan::generate(state.config.demo_seed, Utc::now().date_naive());
    let seeder = DemoDataSeeder::new(state.pool.clone());

    seeder
        .setup_demo_data(&plan, state.config.currency)
        .await?;

    Ok(Json(json!({
        "company_id": Company::demo_id().as_uuid().to_string(),
        "username": DEMO_USERNAME,
        "sales": plan.sales.len(),
        "expenses": plan.expenses.len(),
    })))
}
