//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! ├── api_response.rs     # 공통 응답 봉투 { data, error }
//! └── users/
//!     ├── request/        # 요청 DTO (검증 규칙 포함)
//!     └── response/       # 응답 DTO
//! ```

pub mod api_response;
pub mod users;
