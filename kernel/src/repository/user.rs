use crate::model::{
    id::UserId,
    user::{
        event::{CreateUser, DeleteUser, UpdateUser, UpdateUserProfile, UpdateUserRole},
        User,
    },
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    // ユーザーを登録する（管理者操作）
    async fn create(&self, event: CreateUser) -> AppResult<User>;
    // 全ユーザーの一覧を取得する
    async fn find_all(&self) -> AppResult<Vec<User>>;
    // user_id から User を取得する。存在しない場合は None
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>>;
    // 管理者によるユーザー情報の更新
    async fn update(&self, event: UpdateUser) -> AppResult<()>;
    // 本人によるプロフィール更新
    async fn update_profile(&self, event: UpdateUserProfile) -> AppResult<()>;
    // ロールの変更（管理者操作）
    async fn update_role(&self, event: UpdateUserRole) -> AppResult<()>;
    // ユーザーを削除する（管理者操作）
    async fn delete(&self, event: DeleteUser) -> AppResult<()>;
    // ユーザーの上司一覧を取得する
    async fn find_supervisors(&self, user_id: UserId) -> AppResult<Vec<User>>;
    // ユーザーの部下一覧を取得する
    async fn find_employees(&self, user_id: UserId) -> AppResult<Vec<User>>;
}
