//! # User Service Implementation
//!
//! `users` 리소스의 네 가지 연산(list, get, create, update)을 구현합니다.
//!
//! ## 처리 순서
//!
//! 1. **입력 검증**: id 형식, 요청 본문 필드 검증. 실패 시 저장소를 호출하지 않고 종료
//! 2. **저장소 호출**: [`UserRepository`]를 통해 쿼리 실행 (데드라인 적용)
//! 3. **응답 구성**: 성공 결과를 [`ApiResponse`] 봉투로 감쌈
//!
//! 저장소 에러는 여기서 [`AppError::DatabaseError`]로 변환되며, 호출자에게
//! 패닉이나 처리되지 않은 에러로 전파되지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let service = UserService::new(UserRepository::new(executor, timeout));
//!
//! let created = service.create_user(CreateUserRequest {
//!     username: "alice".to_string(),
//!     email: "a@example.com".to_string(),
//! }).await?;
//! assert!(created.id.is_some());
//! ```

use log::{error, info, warn};
use validator::Validate;
use crate::domain::dto::api_response::ApiResponse;
use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::domain::dto::users::response::{CreatedUserResponse, UpdatedUserResponse, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::repositories::users::user_repo::{NewUser, UserChanges, UserRepository};
use crate::utils::string_utils::parse_numeric_id;

/// 생성 실패 시 클라이언트에게 노출되는 메시지
pub const ERROR_SAVING_DATA: &str = "error saving data";

pub struct UserService {
    user_repo: UserRepository,
}

impl UserService {
    pub fn new(user_repo: UserRepository) -> Self {
        Self { user_repo }
    }

    /// 현재 주입된 저장소 백엔드 이름
    pub fn backend(&self) -> &'static str {
        self.user_repo.backend()
    }

    pub async fn list_users(&self) -> AppResult<ApiResponse<UserResponse>> {
        let users = self.user_repo.find_all().await.map_err(|e| {
            error!("사용자 목록 조회 실패: {}", e);
            AppError::from(e)
        })?;

        Ok(ApiResponse::ok(users.into_iter().map(UserResponse::from).collect()))
    }

    /// 단건 조회. 존재하지 않는 id는 빈 `data` 배열로 응답합니다.
    pub async fn get_user(&self, raw_id: &str) -> AppResult<ApiResponse<UserResponse>> {
        let id = parse_numeric_id(raw_id).inspect_err(|_| {
            warn!("숫자가 아닌 사용자 id 요청: {:?}", raw_id);
        })?;

        let user = self.user_repo.find_by_id(id).await.map_err(|e| {
            error!("사용자 조회 실패 (id={}): {}", id, e);
            AppError::from(e)
        })?;

        Ok(ApiResponse::ok(user.into_iter().map(UserResponse::from).collect()))
    }

    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<ApiResponse<CreatedUserResponse>> {
        request.validate().map_err(|e| {
            warn!("사용자 생성 요청 검증 실패: {}", e);
            AppError::from(e)
        })?;

        let outcome = self
            .user_repo
            .create(NewUser {
                username: request.username.clone(),
                email: request.email.clone(),
            })
            .await
            .map_err(|e| {
                error!("사용자 저장 실패: {}", e);
                AppError::DatabaseError(ERROR_SAVING_DATA.to_string())
            })?;

        info!("사용자 생성 완료 (id={})", outcome.insert_id);

        Ok(ApiResponse::created(
            vec![CreatedUserResponse::from(request)],
            outcome.insert_id,
        ))
    }

    /// 부분 수정. 요청에 포함된 필드만 SET 절에 들어갑니다.
    pub async fn update_user(
        &self,
        raw_id: &str,
        request: UpdateUserRequest,
    ) -> AppResult<ApiResponse<UpdatedUserResponse>> {
        let id = parse_numeric_id(raw_id).inspect_err(|_| {
            warn!("숫자가 아닌 사용자 id 수정 요청: {:?}", raw_id);
        })?;

        request.validate().map_err(|e| {
            warn!("사용자 수정 요청 검증 실패 (id={}): {}", id, e);
            AppError::from(e)
        })?;

        let changes = UserChanges {
            username: request.username.clone(),
            email: request.email.clone(),
        };

        let outcome = self.user_repo.update(id, changes).await.map_err(|e| {
            error!("사용자 수정 실패 (id={}): {}", id, e);
            AppError::from(e)
        })?;

        info!("사용자 수정 완료 (id={}, affected_rows={})", id, outcome.affected_rows);

        Ok(ApiResponse::ok(vec![UpdatedUserResponse::new(id, request)]))
    }
}
