//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 리포지토리는 프로세스 시작 시 생성된 쿼리 실행기를 생성자로 주입받습니다.
//! 전역 상태 없이 `main`에서 명시적으로 조립됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let executor = Database::connect(&url, max_connections).await?;
//! let user_repo = UserRepository::new(executor, DatabaseConfig::query_timeout());
//! ```

pub mod users;
