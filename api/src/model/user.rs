use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::UserId,
    role::Role,
    user::{
        event::{CreateUser, UpdateUser, UpdateUserProfile, UpdateUserRole},
        User,
    },
};
use serde::{Deserialize, Serialize};
use strum::VariantNames;

#[derive(Debug, Serialize, Deserialize, VariantNames)]
#[strum(serialize_all = "kebab-case")]
pub enum RoleName {
    Admin,
    User,
}

impl From<Role> for RoleName {
    fn from(value: Role) -> Self {
        match value {
            Role::Admin => Self::Admin,
            Role::User => Self::User,
        }
    }
}

impl From<RoleName> for Role {
    fn from(value: RoleName) -> Self {
        match value {
            RoleName::Admin => Self::Admin,
            RoleName::User => Self::User,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersResponse {
    pub items: Vec<UserResponse>,
}

impl From<Vec<User>> for UsersResponse {
    fn from(value: Vec<User>) -> Self {
        Self {
            items: value.into_iter().map(UserResponse::from).collect(),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub role: RoleName,
    pub is_active: bool,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            user_id,
            user_name,
            email,
            role,
            is_active,
        } = value;
        Self {
            user_id,
            user_name,
            email,
            role: RoleName::from(role),
            is_active,
        }
    }
}

// 上司・部下・同僚の一覧はタイトル付きで返す
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedUsersResponse {
    pub title: String,
    pub items: Vec<UserResponse>,
}

impl RelatedUsersResponse {
    pub fn new(title: impl Into<String>, users: Vec<User>) -> Self {
        Self {
            title: title.into(),
            items: users.into_iter().map(UserResponse::from).collect(),
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[garde(length(min = 1))]
    user_name: String,
    #[garde(email)]
    email: String,
    #[garde(skip)]
    role: RoleName,
}

impl From<CreateUserRequest> for CreateUser {
    fn from(value: CreateUserRequest) -> Self {
        let CreateUserRequest {
            user_name,
            email,
            role,
        } = value;
        Self {
            user_name,
            email,
            role: Role::from(role),
        }
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[garde(length(min = 1))]
    user_name: String,
    #[garde(email)]
    email: String,
    #[garde(skip)]
    is_active: bool,
}

#[derive(new)]
pub struct UpdateUserRequestWithUserId(UserId, UpdateUserRequest);
impl From<UpdateUserRequestWithUserId> for UpdateUser {
    fn from(value: UpdateUserRequestWithUserId) -> Self {
        let UpdateUserRequestWithUserId(
            user_id,
            UpdateUserRequest {
                user_name,
                email,
                is_active,
            },
        ) = value;
        UpdateUser {
            user_id,
            user_name,
            email,
            is_active,
        }
    }
}

// 本人編集で変更できるのはプロフィール項目のみ
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserProfileRequest {
    #[garde(length(min = 1))]
    user_name: String,
    #[garde(email)]
    email: String,
}

#[derive(new)]
pub struct UpdateUserProfileRequestWithUserId(UserId, UpdateUserProfileRequest);
impl From<UpdateUserProfileRequestWithUserId> for UpdateUserProfile {
    fn from(value: UpdateUserProfileRequestWithUserId) -> Self {
        let UpdateUserProfileRequestWithUserId(
            user_id,
            UpdateUserProfileRequest { user_name, email },
        ) = value;
        UpdateUserProfile {
            user_id,
            user_name,
            email,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRoleRequest {
    role: RoleName,
}

#[derive(new)]
pub struct UpdateUserRoleRequestWithUserId(UserId, UpdateUserRoleRequest);
impl From<UpdateUserRoleRequestWithUserId> for UpdateUserRole {
    fn from(value: UpdateUserRoleRequestWithUserId) -> Self {
        let UpdateUserRoleRequestWithUserId(user_id, UpdateUserRoleRequest { role }) = value;
        Self {
            user_id,
            role: Role::from(role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_user_request_requires_name_and_valid_email() {
        let valid: CreateUserRequest = serde_json::from_value(serde_json::json!({
            "userName": "alice",
            "email": "alice@example.com",
            "role": "User",
        }))
        .unwrap();
        assert!(valid.validate(&()).is_ok());

        let empty_name: CreateUserRequest = serde_json::from_value(serde_json::json!({
            "userName": "",
            "email": "alice@example.com",
            "role": "User",
        }))
        .unwrap();
        assert!(empty_name.validate(&()).is_err());

        let broken_email: CreateUserRequest = serde_json::from_value(serde_json::json!({
            "userName": "alice",
            "email": "not-an-email",
            "role": "User",
        }))
        .unwrap();
        assert!(broken_email.validate(&()).is_err());
    }

    #[test]
    fn user_response_is_camel_cased() {
        let user = User {
            user_id: UserId::new(),
            user_name: "alice".to_string(),
            email: "alice@example.com".to_string(),
            role: Role::Admin,
            is_active: true,
        };

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(json["userName"], "alice");
        assert_eq!(json["role"], "Admin");
        assert_eq!(json["isActive"], true);
    }
}
