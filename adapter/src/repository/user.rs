use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::UserId,
    user::{
        event::{CreateUser, DeleteUser, UpdateUser, UpdateUserProfile, UpdateUserRole},
        User,
    },
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::user::UserRow, ConnectionPool};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    // ユーザーを登録する（管理者操作）
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let user_id = UserId::new();
        let res = sqlx::query(
            r#"
                INSERT INTO users (user_id, user_name, email, role, is_active)
                VALUES ($1, $2, $3, $4, true)
                ;
            "#,
        )
        .bind(user_id)
        .bind(&event.user_name)
        .bind(&event.email)
        .bind(event.role.to_string())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No user record has been created".into(),
            ));
        }

        Ok(User {
            user_id,
            user_name: event.user_name,
            email: event.email,
            role: event.role,
            is_active: true,
        })
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, user_name, email, role, is_active
                FROM users
                ORDER BY created_at ASC
                ;
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
                SELECT user_id, user_name, email, role, is_active
                FROM users
                WHERE user_id = $1
                ;
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(User::try_from).transpose()
    }

    async fn update(&self, event: UpdateUser) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE users
                SET user_name = $1, email = $2, is_active = $3
                WHERE user_id = $4
                ;
            "#,
        )
        .bind(&event.user_name)
        .bind(&event.email)
        .bind(event.is_active)
        .bind(event.user_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "ユーザー（{}）が見つかりませんでした。",
                event.user_id
            )));
        }

        Ok(())
    }

    async fn update_profile(&self, event: UpdateUserProfile) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE users
                SET user_name = $1, email = $2
                WHERE user_id = $3
                ;
            "#,
        )
        .bind(&event.user_name)
        .bind(&event.email)
        .bind(event.user_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "ユーザー（{}）が見つかりませんでした。",
                event.user_id
            )));
        }

        Ok(())
    }

    async fn update_role(&self, event: UpdateUserRole) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE users
                SET role = $1
                WHERE user_id = $2
                ;
            "#,
        )
        .bind(event.role.to_string())
        .bind(event.user_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "ユーザー（{}）が見つかりませんでした。",
                event.user_id
            )));
        }

        Ok(())
    }

    // 削除時は割り当て・上司関係も一緒に消える（スキーマ側の ON DELETE CASCADE）
    async fn delete(&self, event: DeleteUser) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM users WHERE user_id = $1;
            "#,
        )
        .bind(event.user_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound(format!(
                "ユーザー（{}）が見つかりませんでした。",
                event.user_id
            )));
        }

        Ok(())
    }

    async fn find_supervisors(&self, user_id: UserId) -> AppResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
                SELECT u.user_id, u.user_name, u.email, u.role, u.is_active
                FROM users AS u
                INNER JOIN user_supervisors AS us ON u.user_id = us.supervisor_id
                WHERE us.employee_id = $1
                ORDER BY u.user_name ASC
                ;
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(User::try_from).collect()
    }

    async fn find_employees(&self, user_id: UserId) -> AppResult<Vec<User>> {
        let rows: Vec<UserRow> = sqlx::query_as(
            r#"
                SELECT u.user_id, u.user_name, u.email, u.role, u.is_active
                FROM users AS u
                INNER JOIN user_supervisors AS us ON u.user_id = us.employee_id
                WHERE us.supervisor_id = $1
                ORDER BY u.user_name ASC
                ;
            "#,
        )
        .bind(user_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(User::try_from).collect()
    }
}
