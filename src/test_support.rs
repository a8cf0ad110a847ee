//! 테스트 전용 쿼리 실행기
//!
//! - [`RecordingExecutor`] - 인메모리 저장소 위에서 호출 횟수와 마지막 쿼리를 기록
//! - [`FailingExecutor`] - 모든 호출을 저장소 장애로 거부
//! - [`StalledExecutor`] - 응답하지 않는 저장소 (데드라인 검증용)

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use actix_web::rt::time::sleep;
use async_trait::async_trait;
use crate::db::executor::{InsertOutcome, QueryExecutor, StoreError, UpdateOutcome};
use crate::db::memory::MemoryExecutor;
use crate::db::query::{InsertQuery, Row, SelectQuery, UpdateQuery};
use crate::repositories::users::user_repo::UserRepository;
use crate::services::users::user_service::UserService;

#[derive(Default)]
pub struct RecordingExecutor {
    inner: MemoryExecutor,
    calls: AtomicUsize,
    last_insert: Mutex<Option<InsertQuery>>,
    last_update: Mutex<Option<UpdateQuery>>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_insert(&self) -> Option<InsertQuery> {
        self.last_insert.lock().unwrap().clone()
    }

    pub fn last_update(&self) -> Option<UpdateQuery> {
        self.last_update.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueryExecutor for RecordingExecutor {
    fn backend(&self) -> &'static str {
        "recording"
    }

    async fn select(&self, query: &SelectQuery) -> Result<Vec<Row>, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.select(query).await
    }

    async fn insert(&self, query: &InsertQuery) -> Result<InsertOutcome, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_insert.lock().unwrap() = Some(query.clone());
        self.inner.insert(query).await
    }

    async fn update(&self, query: &UpdateQuery) -> Result<UpdateOutcome, StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_update.lock().unwrap() = Some(query.clone());
        self.inner.update(query).await
    }
}

pub struct FailingExecutor;

impl FailingExecutor {
    fn refuse() -> StoreError {
        StoreError::Unavailable("connection refused".to_string())
    }
}

#[async_trait]
impl QueryExecutor for FailingExecutor {
    fn backend(&self) -> &'static str {
        "failing"
    }

    async fn select(&self, _: &SelectQuery) -> Result<Vec<Row>, StoreError> {
        Err(Self::refuse())
    }

    async fn insert(&self, _: &InsertQuery) -> Result<InsertOutcome, StoreError> {
        Err(Self::refuse())
    }

    async fn update(&self, _: &UpdateQuery) -> Result<UpdateOutcome, StoreError> {
        Err(Self::refuse())
    }
}

pub struct StalledExecutor;

#[async_trait]
impl QueryExecutor for StalledExecutor {
    fn backend(&self) -> &'static str {
        "stalled"
    }

    async fn select(&self, _: &SelectQuery) -> Result<Vec<Row>, StoreError> {
        sleep(Duration::from_secs(3600)).await;
        Ok(Vec::new())
    }

    async fn insert(&self, _: &InsertQuery) -> Result<InsertOutcome, StoreError> {
        sleep(Duration::from_secs(3600)).await;
        Ok(InsertOutcome { insert_id: 0, affected_rows: 0 })
    }

    async fn update(&self, _: &UpdateQuery) -> Result<UpdateOutcome, StoreError> {
        sleep(Duration::from_secs(3600)).await;
        Ok(UpdateOutcome { affected_rows: 0 })
    }
}

/// 주어진 실행기 위에 서비스를 조립합니다.
pub fn service_with(executor: Arc<dyn QueryExecutor>) -> UserService {
    UserService::new(UserRepository::new(executor, Duration::from_secs(1)))
}
