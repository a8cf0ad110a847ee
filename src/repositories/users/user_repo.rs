use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use actix_web::rt::time::timeout;
use crate::db::executor::{InsertOutcome, QueryExecutor, StoreError, UpdateOutcome};
use crate::db::query::{InsertQuery, SelectQuery, UpdateQuery};
use crate::domain::entities::users::user::{User, USERS_TABLE};

/// 사용자 생성 시 저장소에 기록되는 값
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}

/// 부분 수정 시 저장소에 기록되는 값 (`None`인 필드는 SET 절에서 제외)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
}

#[derive(Clone)]
pub struct UserRepository {
    executor: Arc<dyn QueryExecutor>,
    query_timeout: Duration,
}

impl UserRepository {
    pub fn new(executor: Arc<dyn QueryExecutor>, query_timeout: Duration) -> Self {
        Self {
            executor,
            query_timeout,
        }
    }

    pub fn backend(&self) -> &'static str {
        self.executor.backend()
    }

    async fn with_deadline<T, F>(&self, call: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        timeout(self.query_timeout, call)
            .await
            .map_err(|_| StoreError::Timeout(self.query_timeout))?
    }

    pub async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        let query = SelectQuery::from_table(USERS_TABLE);

        let rows = self.with_deadline(self.executor.select(&query)).await?;

        rows.into_iter().map(User::try_from).collect()
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, StoreError> {
        let query = SelectQuery::from_table(USERS_TABLE).where_eq("id", id);

        let rows = self.with_deadline(self.executor.select(&query)).await?;

        rows.into_iter().next().map(User::try_from).transpose()
    }

    pub async fn create(&self, user: NewUser) -> Result<InsertOutcome, StoreError> {
        let query = InsertQuery::into_table(USERS_TABLE)
            .value("username", user.username)
            .value("email", user.email);

        self.with_deadline(self.executor.insert(&query)).await
    }

    pub async fn update(&self, id: i64, changes: UserChanges) -> Result<UpdateOutcome, StoreError> {
        let mut query = UpdateQuery::for_row(USERS_TABLE, "id", id);

        if let Some(username) = changes.username {
            query = query.set("username", username);
        }
        if let Some(email) = changes.email {
            query = query.set("email", email);
        }

        if query.is_empty() {
            return Err(StoreError::Rejected("no columns to update".to_string()));
        }

        self.with_deadline(self.executor.update(&query)).await
    }
}
