//! Company (tenant) entity
//!
//! A company is the tenant boundary of the system: users, products, sales,
//! and expenses all hang off exactly one company. Two tenants have fixed,
//! well-known identifiers: the master company created at bootstrap and the
//! demo company targeted by the demo-data seeder.

use chrono::{DateTime, Utc};
use core_kernel::CompanyId;
use serde::{Deserialize, Serialize};

/// A tenant account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Unique company identifier
    pub id: CompanyId,
    /// Company name (unique across tenants)
    pub name: String,
    /// License activation key
    pub license_key: String,
    /// Whether the tenant is currently allowed to operate
    pub is_active: bool,
    /// When the tenant account was created
    pub created_at: DateTime<Utc>,
}

impl Company {
    /// Creates a new active company
    pub fn new(id: CompanyId, name: impl Into<String>, license_key: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            license_key: license_key.into(),
            is_active: true,
            created_at: Utc::now(),
        }
    }

    /// The master tenant created at first boot
    pub fn master_id() -> CompanyId {
        CompanyId::well_known(1)
    }

    /// The fixed tenant used by the demo-data seeder
    pub fn demo_id() -> CompanyId {
        CompanyId::well_known(99)
    }

    /// Blocks the tenant (e.g., lapsed license)
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Re-enables a blocked tenant
    pub fn activate(&mut self) {
        self.is_active = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_company_is_active() {
        let company = Company::new(CompanyId::new(), "Corner Store", "LIC-001");
        assert!(company.is_active);
        assert_eq!(company.name, "Corner Store");
    }

    #[test]
    fn test_deactivate_and_reactivate() {
        let mut company = Company::new(CompanyId::new(), "Corner Store", "LIC-001");
        company.deactivate();
        assert!(!company.is_active);
        company.activate();
        assert!(company.is_active);
    }

    #[test]
    fn test_well_known_tenants_are_distinct() {
        assert_ne!(Company::master_id(), Company::demo_id());
    }
}
