//! Verified tenant context
//!
//! Every ledger operation is scoped to a tenant. The context is constructed
//! only from validated authentication claims, never from caller-supplied
//! parameters, so a request cannot name a company it was not issued for.

use core_kernel::{CompanyId, UserId};
use serde::{Deserialize, Serialize};

use crate::user::Role;

/// The authenticated identity a request acts under
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TenantContext {
    company_id: CompanyId,
    user_id: UserId,
    role: Role,
}

impl TenantContext {
    /// Builds a context from validated claims
    pub fn new(company_id: CompanyId, user_id: UserId, role: Role) -> Self {
        Self {
            company_id,
            user_id,
            role,
        }
    }

    /// The tenant all queries and mutations are filtered by
    pub fn company_id(&self) -> CompanyId {
        self.company_id
    }

    /// The acting user, recorded on sales for traceability
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// The acting user's role
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns true for tenant administrators and platform operators
    pub fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin | Role::Superadmin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_carries_verified_identity() {
        let company = CompanyId::well_known(99);
        let user = UserId::new();
        let ctx = TenantContext::new(company, user, Role::User);

        assert_eq!(ctx.company_id(), company);
        assert_eq!(ctx.user_id(), user);
        assert!(!ctx.is_admin());
    }

    #[test]
    fn test_admin_detection() {
        let ctx = TenantContext::new(CompanyId::new(), UserId::new(), Role::Admin);
        assert!(ctx.is_admin());

        let ctx = TenantContext::new(CompanyId::new(), UserId::new(), Role::Superadmin);
        assert!(ctx.is_admin());
    }
}
