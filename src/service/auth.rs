use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::usermodel::UserRole;

/// The authenticated caller, as vouched for by the external auth service.
#[derive(Debug, Clone, PartialEq)]
pub struct Principal {
    pub user_id: Uuid,
    pub role: UserRole,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no bearer credential provided")]
    MissingCredential,

    #[error("bearer credential is invalid or expired")]
    InvalidCredential,

    #[error("you are not allowed to perform this action")]
    PermissionDenied,

    #[error("auth service unavailable: {0}")]
    Unreachable(String),
}

/// Token issuance and verification live with the external auth service;
/// this is the only surface the back office depends on. An absent or
/// invalid credential is a rejection, never a crash.
#[async_trait]
pub trait AuthProvider {
    async fn authenticate(&self, bearer: &str) -> Result<Principal, AuthError>;
}

/// Guard an operation behind a set of roles.
pub fn role_check(principal: &Principal, required_roles: &[UserRole]) -> Result<(), AuthError> {
    if !required_roles.contains(&principal.role) {
        return Err(AuthError::PermissionDenied);
    }
    Ok(())
}
