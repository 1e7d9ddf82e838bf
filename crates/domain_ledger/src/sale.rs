//! Sale ledger entries
//!
//! A sale is an immutable fact: the unit price is captured at the moment of
//! sale and never re-reads the product's current price. Repricing a product
//! therefore never rewrites history.

use chrono::{DateTime, Utc};
use core_kernel::{CompanyId, Money, ProductId, SaleId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::LedgerError;

/// Whether a sale was charged at the retail or wholesale price
///
/// The wire values are the legacy Portuguese terms carried by existing data:
/// `varejo` (retail) and `atacado` (wholesale).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaleKind {
    #[serde(rename = "varejo")]
    Retail,
    #[serde(rename = "atacado")]
    Wholesale,
}

impl SaleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaleKind::Retail => "varejo",
            SaleKind::Wholesale => "atacado",
        }
    }
}

impl fmt::Display for SaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SaleKind {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "varejo" => Ok(SaleKind::Retail),
            "atacado" => Ok(SaleKind::Wholesale),
            other => Err(LedgerError::UnknownSaleKind(other.to_string())),
        }
    }
}

/// An append-only sale record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    /// Unique sale identifier
    pub id: SaleId,
    /// Product sold
    pub product_id: ProductId,
    /// Units sold
    pub quantity: u32,
    /// Unit price captured at sale time
    pub price: Money,
    /// Retail or wholesale
    pub kind: SaleKind,
    /// When the sale happened
    pub occurred_at: DateTime<Utc>,
    /// Cashier who rang it up
    pub user_id: UserId,
    /// Owning tenant
    pub company_id: CompanyId,
}

impl Sale {
    /// Records a sale at the given captured unit price
    #[allow(clippy::too_many_arguments)]
    pub fn record(
        product_id: ProductId,
        quantity: u32,
        price: Money,
        kind: SaleKind,
        occurred_at: DateTime<Utc>,
        user_id: UserId,
        company_id: CompanyId,
    ) -> Self {
        Self {
            id: SaleId::new_v7(),
            product_id,
            quantity,
            price,
            kind,
            occurred_at,
            user_id,
            company_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    #[test]
    fn test_sale_kind_wire_values() {
        assert_eq!(SaleKind::Retail.as_str(), "varejo");
        assert_eq!(SaleKind::Wholesale.as_str(), "atacado");
        assert_eq!("varejo".parse::<SaleKind>().unwrap(), SaleKind::Retail);
        assert_eq!("atacado".parse::<SaleKind>().unwrap(), SaleKind::Wholesale);
        assert!("retail".parse::<SaleKind>().is_err());
    }

    #[test]
    fn test_sale_kind_serde_uses_wire_values() {
        let json = serde_json::to_string(&SaleKind::Retail).unwrap();
        assert_eq!(json, "\"varejo\"");
        let back: SaleKind = serde_json::from_str("\"atacado\"").unwrap();
        assert_eq!(back, SaleKind::Wholesale);
    }

    #[test]
    fn test_recorded_sale_keeps_captured_price() {
        let captured = Money::new(dec!(1200.0), Currency::EUR);
        let sale = Sale::record(
            ProductId::new(),
            2,
            captured,
            SaleKind::Retail,
            Utc::now(),
            UserId::new(),
            CompanyId::new(),
        );

        assert_eq!(sale.price, captured);
        assert_eq!(sale.quantity, 2);
        assert_eq!(sale.kind, SaleKind::Retail);
    }
}
