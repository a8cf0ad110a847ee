//! API 라우트 설정 모듈
//!
//! `/users` 리소스와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(user_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{error, get, web, HttpResponse};
use serde_json::json;
use crate::errors::AppError;
use crate::handlers;
use crate::services::users::user_service::UserService;

/// 모든 라우트를 설정합니다
///
/// JSON 본문 파싱 실패도 여기서 [`AppError`]로 변환되어, 다른 검증 실패와
/// 같은 `{ data: [], error }` 형태의 400 응답이 됩니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = format!("invalid request body: {}", err);
        log::warn!("{}", message);
        error::Error::from(AppError::ValidationError(message))
    })
}

/// 사용자 관련 라우트를 설정합니다
///
/// - `GET /users` - 사용자 목록
/// - `GET /users/{id}` - 사용자 조회
/// - `POST /users` - 사용자 생성
/// - `PUT /users/{id}` - 사용자 부분 수정
///
/// ```bash
/// curl http://localhost:8080/users/1
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::list_users)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "users_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z",
///   "store": "mysql"
/// }
/// ```
#[get("/health")]
async fn health_check(service: web::Data<UserService>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "store": service.backend(),
    }))
}
