//! 쿼리 실행기 추상화
//!
//! 리포지토리 계층은 구체적인 드라이버 대신 [`QueryExecutor`] 트레이트에만 의존합니다.
//! 운영 환경에서는 [`MySqlExecutor`](super::mysql::MySqlExecutor),
//! 개발/테스트 환경에서는 [`MemoryExecutor`](super::memory::MemoryExecutor)가 주입됩니다.

use std::time::Duration;
use async_trait::async_trait;
use thiserror::Error;
use super::query::{InsertQuery, Row, SelectQuery, UpdateQuery};

/// 저장소 계층 에러
#[derive(Error, Debug)]
pub enum StoreError {
    /// 쿼리가 저장소에서 거부됨 (문법 오류, 제약 조건 위반 등)
    #[error("query rejected: {0}")]
    Rejected(String),

    /// 연결 실패 또는 풀 고갈
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// 결과 행을 값으로 변환하지 못함
    #[error("row decode failed: {0}")]
    Decode(String),

    /// 쿼리 데드라인 초과
    #[error("query timed out after {0:?}")]
    Timeout(Duration),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => StoreError::Unavailable(err.to_string()),
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::TypeNotFound { .. } => StoreError::Decode(err.to_string()),
            _ => StoreError::Rejected(err.to_string()),
        }
    }
}

/// INSERT 실행 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertOutcome {
    /// 저장소가 생성한 auto-increment 키
    pub insert_id: u64,
    pub affected_rows: u64,
}

/// UPDATE 실행 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub affected_rows: u64,
}

/// SQL 저장소에 대한 비동기 CRUD 실행기
///
/// 모든 메서드는 지연된 결과(Future)를 반환하며, 실패 시 [`StoreError`]로 거부됩니다.
/// 구현체는 여러 요청 간에 공유되므로 `Send + Sync`여야 합니다.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// 백엔드 이름 (헬스체크/로그용)
    fn backend(&self) -> &'static str;

    async fn select(&self, query: &SelectQuery) -> Result<Vec<Row>, StoreError>;

    async fn insert(&self, query: &InsertQuery) -> Result<InsertOutcome, StoreError>;

    async fn update(&self, query: &UpdateQuery) -> Result<UpdateOutcome, StoreError>;
}
