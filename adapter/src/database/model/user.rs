use std::str::FromStr;

use kernel::model::{id::UserId, role::Role, user::User};
use shared::error::AppError;

#[derive(sqlx::FromRow)]
pub struct UserRow {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub role: String,
    pub is_active: bool,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(value: UserRow) -> Result<Self, Self::Error> {
        let UserRow {
            user_id,
            user_name,
            email,
            role,
            is_active,
        } = value;
        // role カラムには Role のバリアント名が入っている前提
        let role = Role::from_str(&role)
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))?;
        Ok(User {
            user_id,
            user_name,
            email,
            role,
            is_active,
        })
    }
}
