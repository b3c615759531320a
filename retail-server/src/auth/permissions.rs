//! Permission Definitions
//!
//! Role based: every employee gets the permission set of their role. Read
//! endpoints (order detail, product lookup, current cash session) only need
//! a valid login.

use shared::models::EmployeeRole;

pub const ORDERS_WRITE: &str = "orders:write";
pub const ORDERS_MANAGE: &str = "orders:manage";
pub const PAYMENTS_APPLY: &str = "payments:apply";
pub const CASH_MANAGE: &str = "cash:manage";
pub const REPORTS_VIEW: &str = "reports:view";
pub const REPORTS_CASH: &str = "reports:cash";
pub const REPORTS_SALES: &str = "reports:sales";
pub const INVENTORY_MANAGE: &str = "inventory:manage";
pub const EMPLOYEES_MANAGE: &str = "employees:manage";

/// Every grantable permission
pub const ALL_PERMISSIONS: &[&str] = &[
    ORDERS_WRITE,     // open orders, submit items
    ORDERS_MANAGE,    // finalize, unlock, cancel
    PAYMENTS_APPLY,   // order and client payments
    CASH_MANAGE,      // open/close sessions, manual movements
    REPORTS_VIEW,     // client statements, cash session listing
    REPORTS_CASH,     // cash session reports
    REPORTS_SALES,    // sales by period
    INVENTORY_MANAGE, // create and restock products
    EMPLOYEES_MANAGE, // staff accounts
];

pub const DEFAULT_MANAGER_PERMISSIONS: &[&str] = &["all"];

pub const DEFAULT_CASHIER_PERMISSIONS: &[&str] = &[
    ORDERS_WRITE,
    ORDERS_MANAGE,
    PAYMENTS_APPLY,
    CASH_MANAGE,
    REPORTS_VIEW,
];

pub const DEFAULT_SELLER_PERMISSIONS: &[&str] = &[ORDERS_WRITE];

pub const DEFAULT_STOCKER_PERMISSIONS: &[&str] = &[INVENTORY_MANAGE];

/// Permissions granted to a role
pub fn get_default_permissions(role: EmployeeRole) -> Vec<String> {
    let perms = match role {
        EmployeeRole::Manager => DEFAULT_MANAGER_PERMISSIONS,
        EmployeeRole::Cashier => DEFAULT_CASHIER_PERMISSIONS,
        EmployeeRole::Seller => DEFAULT_SELLER_PERMISSIONS,
        EmployeeRole::Stocker => DEFAULT_STOCKER_PERMISSIONS,
    };
    perms.iter().map(|s| s.to_string()).collect()
}

/// Validate if a permission string is valid
pub fn is_valid_permission(permission: &str) -> bool {
    permission == "all" || ALL_PERMISSIONS.contains(&permission)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_defaults_are_valid_permissions() {
        for role in [
            EmployeeRole::Manager,
            EmployeeRole::Cashier,
            EmployeeRole::Seller,
            EmployeeRole::Stocker,
        ] {
            for p in get_default_permissions(role) {
                assert!(is_valid_permission(&p), "{p} is not a known permission");
            }
        }
    }

    #[test]
    fn wildcards_are_not_permissions() {
        assert!(is_valid_permission("all"));
        assert!(is_valid_permission(REPORTS_SALES));
        assert!(!is_valid_permission("orders:*"));
        assert!(!is_valid_permission("reports"));
    }

    #[test]
    fn seller_cannot_take_payments() {
        let perms = get_default_permissions(EmployeeRole::Seller);
        assert!(perms.contains(&ORDERS_WRITE.to_string()));
        assert!(!perms.contains(&PAYMENTS_APPLY.to_string()));
    }

    #[test]
    fn manager_only_permissions() {
        for role in [EmployeeRole::Cashier, EmployeeRole::Seller, EmployeeRole::Stocker] {
            let perms = get_default_permissions(role);
            for p in [REPORTS_CASH, REPORTS_SALES, EMPLOYEES_MANAGE] {
                assert!(!perms.contains(&p.to_string()), "{role} holds {p}");
            }
        }
    }
}
