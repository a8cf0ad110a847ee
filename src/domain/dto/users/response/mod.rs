//! # 사용자 관련 응답 DTO 모듈
//!
//! 응답 DTO는 항상 [`ApiResponse`](crate::domain::dto::api_response::ApiResponse)의
//! `data` 배열 안에 담겨 전달됩니다.
//!
//! - `UserResponse` - 목록/단건 조회
//! - `CreatedUserResponse` - 생성 요청 echo
//! - `UpdatedUserResponse` - 수정 payload echo

pub mod user_response;

pub use user_response::{CreatedUserResponse, UpdatedUserResponse, UserResponse};
