//! Well-known role name constants.
//!
//! Roles are stored as plain text on `users.role`; these constants are the
//! only values the admin bootstrap and login endpoint will issue.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_EDITOR: &str = "editor";

/// Roles a stored user may hold.
pub const ALL_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_EDITOR];

/// Whether `role` passes the admin gate on mutating endpoints.
pub fn is_admin(role: &str) -> bool {
    role == ROLE_ADMIN
}
