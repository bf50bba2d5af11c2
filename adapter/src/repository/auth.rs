use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{auth::AccessToken, id::UserId},
    repository::auth::AuthRepository,
};
use shared::error::{AppError, AppResult};

use crate::redis::{model::RedisKey, RedisClient};

// セッションの発行は手前のゲートウェイが行い、
// このサービスはキーバリューストア上のトークンを参照・失効するだけ
#[derive(new)]
pub struct AuthRepositoryImpl {
    kv: Arc<RedisClient>,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>> {
        let key: AuthorizationKey = access_token.into();
        self.kv
            .get(&key)
            .await
            .map(|value| value.map(AuthorizedUserId::into_inner))
    }

    async fn invalidate_token(&self, access_token: &AccessToken) -> AppResult<()> {
        let key: AuthorizationKey = access_token.into();
        self.kv.delete(&key).await
    }
}

struct AuthorizationKey(String);

impl RedisKey for AuthorizationKey {
    type Value = AuthorizedUserId;

    fn inner(&self) -> String {
        self.0.to_string()
    }
}

impl From<&AccessToken> for AuthorizationKey {
    fn from(value: &AccessToken) -> Self {
        Self(value.0.to_string())
    }
}

pub struct AuthorizedUserId(UserId);

impl AuthorizedUserId {
    fn into_inner(self) -> UserId {
        self.0
    }
}

impl TryFrom<String> for AuthorizedUserId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value
            .parse::<UserId>()
            .map(Self)
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))
    }
}
