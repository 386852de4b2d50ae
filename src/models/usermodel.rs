use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    SuperAdmin,
}

impl UserRole {
    pub fn to_str(&self) -> &str {
        match self {
            UserRole::Admin => "admin",
            UserRole::SuperAdmin => "superadmin",
        }
    }
}

/// Back-office account. Credential storage and token issuance live with the
/// external auth service; this record only carries the role claim and the
/// activation switch.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AdminUser {
    pub id: Uuid,
    pub username: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
