use crate::model::{auth::AccessToken, id::UserId};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    // アクセストークンからユーザー ID を引く。無効なトークンは None
    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>>;
    // アクセストークンを失効させる
    async fn invalidate_token(&self, access_token: &AccessToken) -> AppResult<()>;
}
