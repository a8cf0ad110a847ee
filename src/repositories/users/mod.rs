//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository)는 `users` 테이블에 대한 쿼리를 조립하고,
//! 주입받은 [`QueryExecutor`](crate::db::executor::QueryExecutor)로 실행합니다.
//! 모든 저장소 호출에는 `QUERY_TIMEOUT_MS` 데드라인이 적용됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::user_repo::UserRepository;
//!
//! let user_repo = UserRepository::new(executor, DatabaseConfig::query_timeout());
//! let user = user_repo.find_by_id(7).await?;
//! ```

pub mod user_repo;
