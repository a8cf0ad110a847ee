use serde::{Deserialize, Serialize};
use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::domain::entities::users::user::User;

/// 조회 응답의 사용자 표현
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User { id, username, email } = user;

        Self { id, username, email }
    }
}

/// 생성 요청 성공 시 되돌려주는 입력값 echo (`id`는 봉투 최상위에 실림)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedUserResponse {
    pub username: String,
    pub email: String,
}

impl From<CreateUserRequest> for CreatedUserResponse {
    fn from(request: CreateUserRequest) -> Self {
        Self {
            username: request.username,
            email: request.email,
        }
    }
}

/// 수정 요청 성공 시 되돌려주는 payload echo
///
/// 요청에 없던 필드는 직렬화에서 생략됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatedUserResponse {
    pub id: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl UpdatedUserResponse {
    pub fn new(id: i64, request: UpdateUserRequest) -> Self {
        Self {
            id,
            username: request.username,
            email: request.email,
        }
    }
}
