//! 사용자 비즈니스 로직 모듈
//!
//! [`UserService`](user_service::UserService)가 `users` 리소스 연산의 의미를 담당합니다.
//! 핸들러는 HTTP 변환만 수행하고, 검증과 저장소 에러 처리는 모두 이 계층에서 이뤄집니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::user_service::UserService;
//!
//! let service = UserService::new(user_repo);
//! let response = service.list_users().await?;
//! ```

pub mod user_service;
