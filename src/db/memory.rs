//! 인메모리 쿼리 실행기
//!
//! `DATABASE_URL=memory` 일 때 사용되는 프로세스 내부 저장소입니다.
//! 테이블마다 auto-increment `id` 컬럼을 관리하며, 프로세스 종료 시 데이터는 사라집니다.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;
use async_trait::async_trait;
use super::executor::{InsertOutcome, QueryExecutor, StoreError, UpdateOutcome};
use super::query::{InsertQuery, Row, SelectQuery, SqlValue, UpdateQuery};

const PRIMARY_KEY: &str = "id";

#[derive(Default)]
struct Table {
    next_id: i64,
    rows: BTreeMap<i64, Row>,
}

#[derive(Default)]
pub struct MemoryExecutor {
    tables: RwLock<HashMap<String, Table>>,
}

impl MemoryExecutor {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("memory store lock poisoned".to_string())
}

#[async_trait]
impl QueryExecutor for MemoryExecutor {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn select(&self, query: &SelectQuery) -> Result<Vec<Row>, StoreError> {
        let tables = self.tables.read().map_err(poisoned)?;

        let Some(table) = tables.get(&query.table) else {
            return Ok(Vec::new());
        };

        Ok(table
            .rows
            .values()
            .filter(|row| query.filter.as_ref().is_none_or(|filter| filter.matches(row)))
            .cloned()
            .collect())
    }

    async fn insert(&self, query: &InsertQuery) -> Result<InsertOutcome, StoreError> {
        if query.values.iter().any(|(column, _)| column == PRIMARY_KEY) {
            return Err(StoreError::Rejected(format!(
                "column '{}' is generated by the store",
                PRIMARY_KEY
            )));
        }

        let mut tables = self.tables.write().map_err(poisoned)?;
        let table = tables.entry(query.table.clone()).or_default();

        table.next_id += 1;
        let id = table.next_id;

        let mut row: Row = query.values.iter().cloned().collect();
        row.insert(PRIMARY_KEY.to_string(), SqlValue::Int(id));
        table.rows.insert(id, row);

        Ok(InsertOutcome {
            insert_id: id as u64,
            affected_rows: 1,
        })
    }

    async fn update(&self, query: &UpdateQuery) -> Result<UpdateOutcome, StoreError> {
        if query.is_empty() {
            return Err(StoreError::Rejected("UPDATE without SET clause".to_string()));
        }

        let mut tables = self.tables.write().map_err(poisoned)?;

        let Some(table) = tables.get_mut(&query.table) else {
            return Ok(UpdateOutcome { affected_rows: 0 });
        };

        let mut affected_rows = 0;
        for row in table.rows.values_mut().filter(|row| query.filter.matches(row)) {
            for (column, value) in &query.assignments {
                row.insert(column.clone(), value.clone());
            }
            affected_rows += 1;
        }

        Ok(UpdateOutcome { affected_rows })
    }
}
