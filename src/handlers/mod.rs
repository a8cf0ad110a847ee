//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 추출 / 응답 매핑            ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 검증 / 에러 변환                     ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 쿼리 조립 / 데드라인              ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   QueryExecutor - MySQL / Memory                ← Store
//! └─────────────────────────────────────────────┘
//! ```
//!
//! 핸들러는 `web::Data<UserService>`로 서비스를 주입받습니다.

pub mod users;
