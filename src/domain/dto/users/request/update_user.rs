//! # 사용자 수정 요청 DTO
//!
//! `PUT /users/{id}` 본문을 표현합니다. 부분 수정이므로 모든 필드는 선택 사항이며,
//! 전달된 필드만 저장소에 기록됩니다. 전달된 필드는 생성 시와 같은 규칙으로 검증합니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::utils::string_utils::{validate_email_address, validate_username};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_has_changes"))]
pub struct UpdateUserRequest {
    #[serde(default)]
    #[validate(custom(function = "validate_username"))]
    pub username: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_email_address"))]
    pub email: Option<String>,
}

/// 수정할 필드가 하나도 없는 요청은 거부
fn validate_has_changes(req: &UpdateUserRequest) -> Result<(), ValidationError> {
    if req.username.is_none() && req.email.is_none() {
        return Err(ValidationError::new("empty_update")
            .with_message("at least one of username or email is required".into()));
    }
    Ok(())
}
