//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON을 구조화된 Rust 타입으로 변환하고 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`web::Json` 추출기)
//! 2. **형식 검증**: 필수 여부, 이메일 형식 (`validator`)
//!
//! 검증 실패는 [`AppError::InvalidFields`](crate::errors::AppError::InvalidFields)로 변환되어
//! 저장소 호출 없이 HTTP 400으로 응답됩니다.

pub mod create_user;
pub mod update_user;

pub use create_user::CreateUserRequest;
pub use update_user::UpdateUserRequest;
