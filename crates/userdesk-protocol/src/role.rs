use serde::{Deserialize, Serialize};

/// Account role as carried on the wire. Integers the schema does not define decode as
/// [`Role::Unspecified`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
#[repr(i32)]
pub enum Role {
    #[default]
    Unspecified = 0,
    User = 1,
    Admin = 2,
}

impl From<i32> for Role {
    fn from(value: i32) -> Self {
        match value {
            1 => Role::User,
            2 => Role::Admin,
            _ => Role::Unspecified,
        }
    }
}

impl From<Role> for i32 {
    fn from(role: Role) -> Self {
        role as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_values() {
        assert_eq!(Role::from(0), Role::Unspecified);
        assert_eq!(Role::from(1), Role::User);
        assert_eq!(Role::from(2), Role::Admin);
        assert_eq!(Role::from(42), Role::Unspecified);
        assert_eq!(Role::from(-1), Role::Unspecified);

        assert_eq!(i32::from(Role::Admin), 2);
    }

    #[test]
    fn serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "1");
        assert_eq!(serde_json::from_str::<Role>("2").unwrap(), Role::Admin);
        assert_eq!(serde_json::from_str::<Role>("7").unwrap(), Role::Unspecified);
    }
}
