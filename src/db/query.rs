//! SQL 쿼리 빌더
//!
//! 테이블 단위 CRUD 쿼리(SELECT/INSERT/UPDATE)를 값 객체로 구성하고,
//! 플레이스홀더(`?`) 기반의 파라미터화된 SQL과 바인딩 값으로 렌더링합니다.
//! 사용자 입력은 절대 SQL 문자열에 직접 삽입되지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::db::query::{SelectQuery, SqlValue};
//!
//! let query = SelectQuery::from_table("users").where_eq("id", SqlValue::Int(7));
//! let (sql, binds) = query.to_sql();
//! assert_eq!(sql, "SELECT * FROM users WHERE id = ?");
//! ```

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// 단일 컬럼 값
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SqlValue {
    Null,
    Int(i64),
    Text(String),
}

impl SqlValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            SqlValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            SqlValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<i64> for SqlValue {
    fn from(value: i64) -> Self {
        SqlValue::Int(value)
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

/// 결과 집합의 한 행 (컬럼명 → 값)
pub type Row = BTreeMap<String, SqlValue>;

/// `WHERE column = ?` 단일 동등 조건
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: String,
    pub value: SqlValue,
}

impl Filter {
    pub fn matches(&self, row: &Row) -> bool {
        row.get(&self.column) == Some(&self.value)
    }
}

/// `SELECT * FROM table [WHERE column = ?]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectQuery {
    pub table: String,
    pub filter: Option<Filter>,
}

impl SelectQuery {
    pub fn from_table(table: &str) -> Self {
        Self {
            table: table.to_string(),
            filter: None,
        }
    }

    pub fn where_eq(mut self, column: &str, value: impl Into<SqlValue>) -> Self {
        self.filter = Some(Filter {
            column: column.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn to_sql(&self) -> (String, Vec<SqlValue>) {
        let mut sql = format!("SELECT * FROM {}", self.table);
        let mut binds = Vec::new();

        if let Some(filter) = &self.filter {
            sql.push_str(&format!(" WHERE {} = ?", filter.column));
            binds.push(filter.value.clone());
        }

        (sql, binds)
    }
}

/// `INSERT INTO table (columns...) VALUES (?...)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertQuery {
    pub table: String,
    pub values: Vec<(String, SqlValue)>,
}

impl InsertQuery {
    pub fn into_table(table: &str) -> Self {
        Self {
            table: table.to_string(),
            values: Vec::new(),
        }
    }

    pub fn value(mut self, column: &str, value: impl Into<SqlValue>) -> Self {
        self.values.push((column.to_string(), value.into()));
        self
    }

    pub fn to_sql(&self) -> (String, Vec<SqlValue>) {
        let columns: Vec<&str> = self.values.iter().map(|(column, _)| column.as_str()).collect();
        let placeholders = vec!["?"; columns.len()].join(", ");

        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            columns.join(", "),
            placeholders
        );
        let binds = self.values.iter().map(|(_, value)| value.clone()).collect();

        (sql, binds)
    }
}

/// `UPDATE table SET column = ?, ... WHERE column = ?`
///
/// 필터 없는 UPDATE는 만들 수 없습니다. 생성 시점에 대상 행 선택 조건을 받습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateQuery {
    pub table: String,
    pub assignments: Vec<(String, SqlValue)>,
    pub filter: Filter,
}

impl UpdateQuery {
    pub fn for_row(table: &str, column: &str, value: impl Into<SqlValue>) -> Self {
        Self {
            table: table.to_string(),
            assignments: Vec::new(),
            filter: Filter {
                column: column.to_string(),
                value: value.into(),
            },
        }
    }

    pub fn set(mut self, column: &str, value: impl Into<SqlValue>) -> Self {
        self.assignments.push((column.to_string(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// 할당 대상 컬럼 이름 목록
    pub fn columns(&self) -> Vec<&str> {
        self.assignments.iter().map(|(column, _)| column.as_str()).collect()
    }

    pub fn to_sql(&self) -> (String, Vec<SqlValue>) {
        let set_clause = self
            .assignments
            .iter()
            .map(|(column, _)| format!("{} = ?", column))
            .collect::<Vec<_>>()
            .join(", ");

        let sql = format!(
            "UPDATE {} SET {} WHERE {} = ?",
            self.table, set_clause, self.filter.column
        );

        let mut binds: Vec<SqlValue> = self.assignments.iter().map(|(_, value)| value.clone()).collect();
        binds.push(self.filter.value.clone());

        (sql, binds)
    }
}
