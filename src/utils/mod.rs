//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - id 파싱과 요청 필드 검증 유틸리티
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::parse_numeric_id;
//!
//! let id = parse_numeric_id(&path)?; // "abc" → 400 "id must be numeric"
//! ```

pub mod string_utils;
