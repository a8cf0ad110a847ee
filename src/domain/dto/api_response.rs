//! 공통 API 응답 봉투(envelope)
//!
//! 모든 `/users` 엔드포인트는 성공/실패와 관계없이 같은 형태로 응답합니다.
//!
//! ```json
//! { "data": [ ... ], "error": null }
//! ```
//!
//! - `data`: 항상 배열. 실패 시 빈 배열
//! - `error`: 성공 시 `null`, 실패 시 사람이 읽을 수 있는 메시지
//! - `id`: 생성 요청 성공 시에만 포함 (저장소가 발급한 키)
//! - `errors`: 필드 검증 실패 시에만 포함

use std::borrow::Cow;
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

/// 필드 단위 검증 실패 정보
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    /// `validator` 검증 결과를 필드명 순으로 평탄화합니다.
    ///
    /// 스키마 수준 에러(`__all__`)는 `body` 필드로 보고됩니다.
    pub fn collect(errors: &ValidationErrors) -> Vec<Self> {
        let mut collected: Vec<Self> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, field_errors)| {
                let field = if field == "__all__" { Cow::Borrowed("body") } else { field };
                field_errors.iter().map(move |error| Self {
                    field: field.to_string(),
                    message: error
                        .message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| error.code.to_string()),
                })
            })
            .collect();

        collected.sort_by(|a, b| a.field.cmp(&b.field));
        collected
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: Vec<T>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: Vec<T>) -> Self {
        Self {
            data,
            id: None,
            error: None,
            errors: Vec::new(),
        }
    }

    pub fn created(data: Vec<T>, id: u64) -> Self {
        Self {
            id: Some(id),
            ..Self::ok(data)
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            data: Vec::new(),
            id: None,
            error: Some(message.into()),
            errors: Vec::new(),
        }
    }

    pub fn with_field_errors(mut self, errors: Vec<FieldError>) -> Self {
        self.errors = errors;
        self
    }
}
