//! MySQL 쿼리 실행기
//!
//! sqlx `MySqlPool` 위에서 [`QueryExecutor`]를 구현합니다.
//! 결과 행은 컬럼 타입 이름을 보고 [`SqlValue`]로 범용 디코딩됩니다.

use async_trait::async_trait;
use log::debug;
use sqlx::mysql::{MySqlArguments, MySqlPool, MySqlPoolOptions, MySqlRow};
use sqlx::query::Query;
use sqlx::{Column, MySql, Row as _, TypeInfo};
use super::executor::{InsertOutcome, QueryExecutor, StoreError, UpdateOutcome};
use super::query::{InsertQuery, Row, SelectQuery, SqlValue, UpdateQuery};

/// `users` 테이블 부트스트랩 DDL
const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id BIGINT NOT NULL AUTO_INCREMENT PRIMARY KEY,
        username VARCHAR(255) NOT NULL,
        email VARCHAR(255) NOT NULL
    )
"#;

pub struct MySqlExecutor {
    pool: MySqlPool,
}

impl MySqlExecutor {
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = MySqlPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;

        Ok(Self { pool })
    }

    pub async fn ensure_users_table(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_USERS_TABLE).execute(&self.pool).await?;
        Ok(())
    }
}

fn bind_all<'q>(
    mut query: Query<'q, MySql, MySqlArguments>,
    binds: Vec<SqlValue>,
) -> Query<'q, MySql, MySqlArguments> {
    for value in binds {
        query = match value {
            SqlValue::Null => query.bind(Option::<String>::None),
            SqlValue::Int(value) => query.bind(value),
            SqlValue::Text(value) => query.bind(value),
        };
    }
    query
}

fn decode_row(row: &MySqlRow) -> Result<Row, StoreError> {
    let mut decoded = Row::new();

    for column in row.columns() {
        let index = column.ordinal();
        let type_name = column.type_info().name();

        let value = if type_name.ends_with("UNSIGNED") {
            row.try_get::<Option<u64>, _>(index)?
                .map(|value| {
                    i64::try_from(value)
                        .map(SqlValue::Int)
                        .map_err(|e| StoreError::Decode(format!("{}: {}", column.name(), e)))
                })
                .transpose()?
        } else if type_name.ends_with("INT") {
            row.try_get::<Option<i64>, _>(index)?.map(SqlValue::Int)
        } else {
            row.try_get::<Option<String>, _>(index)?.map(SqlValue::Text)
        };

        decoded.insert(column.name().to_string(), value.unwrap_or(SqlValue::Null));
    }

    Ok(decoded)
}

#[async_trait]
impl QueryExecutor for MySqlExecutor {
    fn backend(&self) -> &'static str {
        "mysql"
    }

    async fn select(&self, query: &SelectQuery) -> Result<Vec<Row>, StoreError> {
        let (sql, binds) = query.to_sql();
        debug!("{}", sql);

        let rows = bind_all(sqlx::query(&sql), binds)
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(decode_row).collect()
    }

    async fn insert(&self, query: &InsertQuery) -> Result<InsertOutcome, StoreError> {
        let (sql, binds) = query.to_sql();
        debug!("{}", sql);

        let result = bind_all(sqlx::query(&sql), binds)
            .execute(&self.pool)
            .await?;

        Ok(InsertOutcome {
            insert_id: result.last_insert_id(),
            affected_rows: result.rows_affected(),
        })
    }

    async fn update(&self, query: &UpdateQuery) -> Result<UpdateOutcome, StoreError> {
        let (sql, binds) = query.to_sql();
        debug!("{}", sql);

        let result = bind_all(sqlx::query(&sql), binds)
            .execute(&self.pool)
            .await?;

        Ok(UpdateOutcome {
            affected_rows: result.rows_affected(),
        })
    }
}
