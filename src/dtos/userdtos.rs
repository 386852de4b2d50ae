use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::usermodel::{AdminUser, UserRole};

#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct CreateAdminDto {
    #[validate(length(min = 3, max = 50, message = "Username must be between 3 and 50 characters"))]
    pub username: String,

    pub role: UserRole,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FilterAdminDto {
    pub id: String,
    pub username: String,
    pub role: String,
    pub is_active: bool,
}

impl FilterAdminDto {
    pub fn filter_user(user: &AdminUser) -> Self {
        FilterAdminDto {
            id: user.id.to_string(),
            username: user.username.clone(),
            role: user.role.to_str().to_string(),
            is_active: user.is_active,
        }
    }

    pub fn filter_users(users: &[AdminUser]) -> Vec<FilterAdminDto> {
        users.iter().map(FilterAdminDto::filter_user).collect()
    }
}

#[derive(Serialize, Deserialize)]
pub struct Response {
    pub status: &'static str,
    pub message: String,
}
