//! Checkout DTOs

use domain_ledger::SaleKind;
use infra_db::{SaleOutcome, SaleReceipt};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Checkout request body
#[derive(Debug, Deserialize, Validate)]
pub struct CheckoutRequest {
    pub product_id: Uuid,
    #[validate(range(min = 1))]
    pub quantity: u32,
    pub kind: SaleKind,
}

/// Checkout result
///
/// Declines are successful HTTP responses with `success: false` and a
/// human-readable message; only infrastructure failures become error
/// statuses.
#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt: Option<SaleReceipt>,
}

impl From<SaleOutcome> for CheckoutResponse {
    fn from(outcome: SaleOutcome) -> Self {
        match outcome {
            SaleOutcome::Completed(receipt) => Self {
                success: true,
                message: format!(
                    "Sold {}x {} at {}",
                    receipt.quantity, receipt.product_name, receipt.price
                ),
                receipt: Some(receipt),
            },
            SaleOutcome::Declined { reason } => Self {
                success: false,
                message: reason.message().to_string(),
                receipt: None,
            },
        }
    }
}
