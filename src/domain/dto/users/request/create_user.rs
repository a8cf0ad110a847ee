//! # 사용자 생성 요청 DTO
//!
//! `POST /users` 본문을 표현합니다.
//!
//! ## 검증 규칙
//!
//! - `username`: 필수, 공백만으로 구성될 수 없음
//! - `email`: 필수, 이메일 형식
//!
//! 필드가 아예 누락된 경우에도 역직렬화는 빈 문자열로 성공하고,
//! 이후 검증 단계에서 "필수" 에러로 보고됩니다. 따라서 누락과 빈 값이
//! 같은 구조화된 400 응답으로 처리됩니다.

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::utils::string_utils::{validate_email_address, validate_username};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_username"))]
    pub username: String,

    #[serde(default)]
    #[validate(custom(function = "validate_email_address"))]
    pub email: String,
}
