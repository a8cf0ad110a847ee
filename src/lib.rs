//! 사용자 리소스 서비스 백엔드
//!
//! SQL 저장소 위에 `users` 리소스의 REST API(목록, 조회, 생성, 부분 수정)를 제공합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /users, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 추출 및 응답 매핑
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 검증, 에러 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 쿼리 조립, 데드라인
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ QueryExecutor   │ ← MySQL(sqlx) / Memory
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use users_service::db::Database;
//! use users_service::repositories::users::user_repo::UserRepository;
//! use users_service::services::users::user_service::UserService;
//!
//! let executor = Database::connect("memory", 1).await?;
//! let service = UserService::new(UserRepository::new(executor, Duration::from_secs(5)));
//! let users = service.list_users().await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;

#[cfg(test)]
mod test_support;
