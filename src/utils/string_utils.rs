//! # 문자열 유틸리티
//!
//! 경로 파라미터 파싱과 요청 필드 검증에 쓰이는 공통 함수들입니다.

use validator::{ValidateEmail, ValidationError};
use crate::errors::AppError;

/// 숫자가 아닌 id에 대한 응답 메시지
pub const ID_MUST_BE_NUMERIC: &str = "id must be numeric";

/// 경로의 `id` 문자열을 정수 키로 변환합니다.
///
/// 부호를 포함한 10진 정수 전체가 일치해야 합니다. `"12a"`, `""`, `"1.5"`처럼
/// 일부만 숫자인 입력은 거부되며, 저장소 호출 전에 400 응답으로 끝납니다.
///
/// 키는 `BIGINT` 정수이므로 `"1.0"` 같은 소수 표기와 `i64` 범위를 넘는 정수도
/// 숫자가 아닌 것으로 취급합니다.
pub fn parse_numeric_id(raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::ValidationError(ID_MUST_BE_NUMERIC.to_string()))
}

pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 사용자명 필수 검증 (공백만 있는 값도 거부)
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if !is_valid_string(username) {
        return Err(ValidationError::new("required")
            .with_message("username is required".into()));
    }
    Ok(())
}

/// 이메일 필수 + 형식 검증
pub fn validate_email_address(email: &str) -> Result<(), ValidationError> {
    if !is_valid_string(email) {
        return Err(ValidationError::new("required")
            .with_message("email is required".into()));
    }

    if !email.validate_email() {
        return Err(ValidationError::new("email")
            .with_message("email must be a valid email address".into()));
    }

    Ok(())
}
