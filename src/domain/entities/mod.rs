//! # Domain Entities Module
//!
//! 저장소 테이블과 1:1로 대응되는 엔티티들을 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (저장소 행 매핑)
//! └── dto/          ← 데이터 전송 객체
//! ```
//!
//! 엔티티는 쿼리 실행기가 돌려준 범용 [`Row`](crate::db::query::Row)를
//! `TryFrom`으로 변환해 만들어지며, 변환 실패는 저장소 에러로 취급합니다.

pub mod users;
