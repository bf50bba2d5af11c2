use crate::model::{id::UserId, role::Role};

pub struct CreateUser {
    pub user_name: String,
    pub email: String,
    pub role: Role,
}

// 管理者によるユーザー情報の更新
#[derive(Debug)]
pub struct UpdateUser {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub is_active: bool,
}

// 本人によるプロフィール更新。
// 権限・有効フラグなどの制限項目は本人編集では変更できない。
#[derive(Debug)]
pub struct UpdateUserProfile {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
}

#[derive(Debug)]
pub struct UpdateUserRole {
    pub user_id: UserId,
    pub role: Role,
}

#[derive(Debug)]
pub struct DeleteUser {
    pub user_id: UserId,
}
