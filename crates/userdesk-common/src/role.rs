//! Display labels for account roles.

use userdesk_protocol::Role;

pub fn role_label(role: Role) -> &'static str {
    match role {
        Role::Admin => "管理员",
        Role::User => "用户",
        Role::Unspecified => "未知",
    }
}

/// Only roles that grant access are valid; `Unspecified` is not.
pub fn is_valid_role(role: Role) -> bool {
    matches!(role, Role::Admin | Role::User)
}
