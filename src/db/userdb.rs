use async_trait::async_trait;
use uuid::Uuid;

use crate::db::StorageError;
use crate::models::usermodel::AdminUser;

/// Storage contract for back-office accounts. Credentials and tokens live
/// with the external auth service.
#[async_trait]
pub trait UserExt {
    async fn list_admins(&self) -> Result<Vec<AdminUser>, StorageError>;

    async fn insert_admin(&self, user: AdminUser) -> Result<AdminUser, StorageError>;

    /// Flip the activation switch. `None` when no account carries the id.
    async fn set_admin_active(
        &self,
        user_id: Uuid,
        is_active: bool,
    ) -> Result<Option<AdminUser>, StorageError>;

    /// Hard delete. Returns whether an account was removed.
    async fn delete_admin(&self, user_id: Uuid) -> Result<bool, StorageError>;
}
