//! # User Data Transfer Objects Module
//!
//! 사용자 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//!
//! ```text
//! users/
//! ├── request/                    # 클라이언트 → 서버
//! │   ├── create_user.rs         # POST /users
//! │   └── update_user.rs         # PUT /users/{id}
//! └── response/                   # 서버 → 클라이언트
//!     └── user_response.rs       # 조회 결과 및 요청 echo
//! ```

pub mod request;
pub mod response;
