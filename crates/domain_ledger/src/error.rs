//! Ledger domain errors

use core_kernel::MoneyError;
use thiserror::Error;

/// Errors that can occur in the ledger domain
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Sale kind string was neither `varejo` nor `atacado`
    #[error("Unknown sale kind: {0}")]
    UnknownSaleKind(String),

    /// Aggregation across mismatched currencies or division failures
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}
