//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! let users = rows
//!     .into_iter()
//!     .map(User::try_from)
//!     .collect::<Result<Vec<_>, _>>()?;
//! ```

pub mod user;
