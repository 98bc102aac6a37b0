//! User records returned by the user service.

use serde::{Deserialize, Serialize};

use crate::Role;
use crate::WireTimestamp;

/// A user as returned by the user service. Timestamps the service left unset are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub nickname: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<WireTimestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<WireTimestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_expires_at: Option<WireTimestamp>,
}
