//! Unit tests for the identity domain

use core_kernel::{CompanyId, UserId};
use domain_identity::{hash_password, Company, Role, TenantContext, User};

mod companies {
    use super::*;

    #[test]
    fn test_master_and_demo_tenants_are_fixed() {
        // Re-deriving the well-known ids must always give the same values.
        assert_eq!(Company::master_id(), CompanyId::well_known(1));
        assert_eq!(Company::demo_id(), CompanyId::well_known(99));
    }

    #[test]
    fn test_new_company_starts_active() {
        let company = Company::new(Company::demo_id(), "PeegFlow Tech Store", "DEMO-2026");
        assert!(company.is_active);
        assert_eq!(company.license_key, "DEMO-2026");
    }
}

mod credentials {
    use super::*;

    #[test]
    fn test_login_flow_verifies_against_hash() {
        let hash = hash_password("admin123").unwrap();
        let user = User::new(
            UserId::new(),
            "admin",
            hash,
            Role::Superadmin,
            Company::master_id(),
        );

        assert!(user.verify_password("admin123").unwrap());
        assert!(!user.verify_password("admin124").unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        // Two users with the same password must not share a hash.
        let first = hash_password("hunter2").unwrap();
        let second = hash_password("hunter2").unwrap();
        assert_ne!(first, second);
    }
}

mod tenancy {
    use super::*;

    #[test]
    fn test_context_is_bound_to_one_company() {
        let ctx = TenantContext::new(Company::demo_id(), UserId::new(), Role::User);
        assert_eq!(ctx.company_id(), Company::demo_id());
        assert_ne!(ctx.company_id(), Company::master_id());
    }

    #[test]
    fn test_cashier_is_not_admin() {
        let ctx = TenantContext::new(Company::demo_id(), UserId::new(), Role::User);
        assert!(!ctx.is_admin());
    }
}
