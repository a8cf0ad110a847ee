//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 사용자 리소스 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 실패를
//! 성공 응답과 동일한 봉투(`{ data: [], error }`)로 변환합니다.
//!
//! ## 상태 코드 규칙
//!
//! | 에러 | 상태 코드 |
//! |------|-----------|
//! | `ValidationError`, `InvalidFields` | 400 Bad Request |
//! | `DatabaseError` | 500 Internal Server Error |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn list_users(&self) -> Result<Vec<User>, AppError> {
//!     let users = self.user_repo.find_all().await?; // StoreError → DatabaseError
//!     Ok(users)
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use validator::ValidationErrors;
use crate::db::executor::StoreError;
use crate::domain::dto::api_response::{ApiResponse, FieldError};

/// 애플리케이션 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 단일 메시지 입력값 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 필드 단위 검증 에러 (400 Bad Request)
    #[error("Validation error: {} invalid field(s)", .0.len())]
    InvalidFields(Vec<FieldError>),

    /// 저장소 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl AppError {
    /// 응답 본문의 `error` 필드에 실리는 메시지
    pub fn public_message(&self) -> String {
        match self {
            AppError::ValidationError(msg) => msg.clone(),
            AppError::InvalidFields(_) => "validation failed".to_string(),
            AppError::DatabaseError(msg) => msg.clone(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::InvalidFields(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut body = ApiResponse::<serde_json::Value>::failure(self.public_message());

        if let AppError::InvalidFields(fields) = self {
            body = body.with_field_errors(fields.clone());
        }

        HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::InvalidFields(FieldError::collect(&errors))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::{json, Value};

    async fn body_of(error: AppError) -> (StatusCode, Value) {
        let response = error.error_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_validation_error_response() {
        let (status, body) = body_of(AppError::ValidationError("id must be numeric".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "data": [], "error": "id must be numeric" }));
    }

    #[actix_web::test]
    async fn test_invalid_fields_response_lists_fields() {
        let error = AppError::InvalidFields(vec![FieldError::new("email", "email is required")]);
        let (status, body) = body_of(error).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "validation failed");
        assert_eq!(body["errors"][0]["field"], "email");
    }

    #[actix_web::test]
    async fn test_database_error_response() {
        let (status, body) = body_of(AppError::DatabaseError("error saving data".to_string())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "data": [], "error": "error saving data" }));
    }

    #[test]
    fn test_store_error_converts_to_database_error() {
        let error = AppError::from(StoreError::Unavailable("connection refused".to_string()));

        match error {
            AppError::DatabaseError(msg) => assert!(msg.contains("connection refused")),
            other => panic!("Expected DatabaseError, got {:?}", other),
        }
    }
}
