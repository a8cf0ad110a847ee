//! User Entity Implementation
//!
//! `users` 테이블의 한 행에 대응하는 사용자 엔티티입니다.
//! `id`는 저장소가 발급하며 생성 이후 변경되지 않습니다.

use serde::{Deserialize, Serialize};
use crate::db::executor::StoreError;
use crate::db::query::Row;

pub const USERS_TABLE: &str = "users";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

impl TryFrom<Row> for User {
    type Error = StoreError;

    fn try_from(row: Row) -> Result<Self, Self::Error> {
        let id = row
            .get("id")
            .and_then(|value| value.as_int())
            .ok_or_else(|| StoreError::Decode("users.id is missing or not an integer".to_string()))?;

        let text = |column: &str| {
            row.get(column)
                .and_then(|value| value.as_text())
                .map(str::to_string)
                .ok_or_else(|| StoreError::Decode(format!("users.{} is missing or not text", column)))
        };

        Ok(Self {
            id,
            username: text("username")?,
            email: text("email")?,
        })
    }
}
