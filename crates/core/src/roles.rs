//! Well-known role name constants.
//!
//! These must match the role names issued by the backend in the user profile.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_MANAGER: &str = "manager";
pub const ROLE_SALES: &str = "sales";

/// Roles allowed on staff-only screens (everything except leads and the
/// sales tools).
pub const STAFF_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_MANAGER];

/// Whether `role` may open staff-only screens.
pub fn is_staff(role: &str) -> bool {
    STAFF_ROLES.contains(&role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_and_manager_are_staff() {
        assert!(is_staff(ROLE_ADMIN));
        assert!(is_staff(ROLE_MANAGER));
    }

    #[test]
    fn sales_is_not_staff() {
        assert!(!is_staff(ROLE_SALES));
        assert!(!is_staff(""));
    }
}
