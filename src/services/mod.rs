//! 비즈니스 로직 서비스 모듈
//!
//! 서비스는 `main`에서 리포지토리를 주입받아 생성되고,
//! `web::Data`로 모든 워커에 공유됩니다.

pub mod users;
