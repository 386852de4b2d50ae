use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::db::userdb::UserExt;
use crate::dtos::userdtos::{CreateAdminDto, FilterAdminDto};
use crate::models::usermodel::{AdminUser, UserRole};
use crate::service::auth::{role_check, Principal};
use crate::service::error::ServiceError;

/// Back-office account management. Every operation here is
/// superadmin-only; regular admins manage content, not accounts.
#[derive(Debug, Clone)]
pub struct UserService<D> {
    db_client: Arc<D>,
}

impl<D: UserExt + Send + Sync> UserService<D> {
    pub fn new(db_client: Arc<D>) -> Self {
        Self { db_client }
    }

    pub async fn list_admins(
        &self,
        principal: &Principal,
    ) -> Result<Vec<FilterAdminDto>, ServiceError> {
        role_check(principal, &[UserRole::SuperAdmin])?;
        let admins = self.db_client.list_admins().await?;
        Ok(FilterAdminDto::filter_users(&admins))
    }

    pub async fn create_admin(
        &self,
        principal: &Principal,
        body: CreateAdminDto,
    ) -> Result<AdminUser, ServiceError> {
        role_check(principal, &[UserRole::SuperAdmin])?;
        body.validate()
            .map_err(|e| ServiceError::Validation(e.to_string()))?;

        let user = AdminUser {
            id: Uuid::new_v4(),
            username: body.username,
            role: body.role,
            is_active: true,
            created_at: Utc::now(),
        };

        let created = self.db_client.insert_admin(user).await?;
        tracing::info!(user_id = %created.id, "admin account created");
        Ok(created)
    }

    /// Deactivation keeps the account around but locks it out; the auth
    /// service refuses tokens for inactive accounts.
    pub async fn set_admin_active(
        &self,
        principal: &Principal,
        user_id: Uuid,
        is_active: bool,
    ) -> Result<AdminUser, ServiceError> {
        role_check(principal, &[UserRole::SuperAdmin])?;
        self.db_client
            .set_admin_active(user_id, is_active)
            .await?
            .ok_or(ServiceError::AdminNotFound(user_id))
    }

    pub async fn delete_admin(
        &self,
        principal: &Principal,
        user_id: Uuid,
    ) -> Result<(), ServiceError> {
        role_check(principal, &[UserRole::SuperAdmin])?;
        let removed = self.db_client.delete_admin(user_id).await?;
        if !removed {
            return Err(ServiceError::AdminNotFound(user_id));
        }
        tracing::info!(%user_id, "admin account deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::memory::InMemoryStore;
    use crate::service::auth::AuthError;

    fn principal(role: UserRole) -> Principal {
        Principal {
            user_id: Uuid::new_v4(),
            role,
        }
    }

    fn dto(username: &str) -> CreateAdminDto {
        CreateAdminDto {
            username: username.to_string(),
            role: UserRole::Admin,
        }
    }

    fn service() -> UserService<InMemoryStore> {
        UserService::new(Arc::new(InMemoryStore::new()))
    }

    #[tokio::test]
    async fn test_plain_admin_cannot_manage_accounts() {
        let svc = service();
        let err = svc
            .create_admin(&principal(UserRole::Admin), dto("editor"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Auth(AuthError::PermissionDenied)
        ));
    }

    #[tokio::test]
    async fn test_superadmin_full_lifecycle() {
        let svc = service();
        let root = principal(UserRole::SuperAdmin);

        let created = svc.create_admin(&root, dto("editor")).await.unwrap();
        assert!(created.is_active);

        let deactivated = svc
            .set_admin_active(&root, created.id, false)
            .await
            .unwrap();
        assert!(!deactivated.is_active);

        svc.delete_admin(&root, created.id).await.unwrap();
        assert!(svc.list_admins(&root).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_storage_conflict() {
        let svc = service();
        let root = principal(UserRole::SuperAdmin);
        svc.create_admin(&root, dto("editor")).await.unwrap();
        let err = svc.create_admin(&root, dto("editor")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Storage(_)));
    }
}
