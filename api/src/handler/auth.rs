use axum::{extract::State, http::StatusCode};
use registry::AppRegistry;
use shared::error::AppResult;

use crate::extractor::AuthorizedUser;

// トークンの発行はゲートウェイ側の責務。ここでは失効のみ行う
pub async fn logout(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<StatusCode> {
    registry
        .auth_repository()
        .invalidate_token(&user.access_token)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
