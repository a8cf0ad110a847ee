//! # User Management HTTP Handlers
//!
//! `/users` 리소스의 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 핸들러는 경로/본문을 추출해 [`UserService`]에 넘기고, 결과를 [`respond`]로
//! HTTP 응답에 매핑하는 일만 합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 성공 | 검증 실패 | 저장소 실패 |
//! |--------|------|------|------|-----------|-------------|
//! | `GET` | `/users` | 사용자 목록 | 200 | - | 500 |
//! | `GET` | `/users/{id}` | 사용자 조회 | 200 | 400 | 500 |
//! | `POST` | `/users` | 사용자 생성 | 200 | 400 | 500 |
//! | `PUT` | `/users/{id}` | 사용자 부분 수정 | 200 | 400 | 500 |
//!
//! ## 응답 형식
//!
//! 모든 응답은 `{ "data": [...], "error": null | "..." }` 봉투를 사용합니다.
//!
//! ```json
//! { "data": [{ "username": "alice", "email": "a@example.com" }], "id": 1, "error": null }
//! ```

use actix_web::{get, post, put, web, HttpResponse, ResponseError};
use serde::Serialize;
use crate::domain::dto::api_response::ApiResponse;
use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::errors::AppResult;
use crate::services::users::user_service::UserService;
use crate::utils::string_utils::parse_numeric_id;

/// 연산 결과를 HTTP 응답으로 변환하는 단일 매핑 함수
///
/// 성공은 200과 봉투, 실패는 [`AppError`](crate::errors::AppError)의 상태 코드와 봉투입니다.
pub fn respond<T: Serialize>(result: AppResult<ApiResponse<T>>) -> HttpResponse {
    match result {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(err) => err.error_response(),
    }
}

/// 사용자 목록 조회 핸들러
///
/// `GET /users`
#[get("")]
pub async fn list_users(service: web::Data<UserService>) -> HttpResponse {
    respond(service.list_users().await)
}

/// 사용자 조회 핸들러
///
/// `GET /users/{id}`
///
/// `id`가 숫자가 아니면 저장소를 호출하지 않고 400을 반환합니다.
///
/// ```json
/// { "data": [], "error": "id must be numeric" }
/// ```
#[get("/{id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    id: web::Path<String>,
) -> HttpResponse {
    respond(service.get_user(&id).await)
}

/// 사용자 생성 핸들러
///
/// `POST /users`
///
/// # 요청 본문
///
/// ```json
/// { "username": "alice", "email": "a@example.com" }
/// ```
///
/// # 검증 실패 (400 Bad Request)
///
/// ```json
/// {
///   "data": [],
///   "error": "validation failed",
///   "errors": [{ "field": "email", "message": "email is required" }]
/// }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/users \
///   -H "Content-Type: application/json" \
///   -d '{"username":"alice","email":"a@example.com"}'
/// ```
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> HttpResponse {
    respond(service.create_user(payload.into_inner()).await)
}

/// 사용자 부분 수정 핸들러
///
/// `PUT /users/{id}`
///
/// 본문에 포함된 필드(`username`, `email`)만 수정합니다.
///
/// `id` 검증이 본문 파싱보다 우선합니다. 본문 오류는 `id`가 숫자일 때만 응답됩니다.
#[put("/{id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    id: web::Path<String>,
    payload: Result<web::Json<UpdateUserRequest>, actix_web::Error>,
) -> HttpResponse {
    let payload = match payload {
        Ok(payload) => payload.into_inner(),
        Err(body_error) => {
            return match parse_numeric_id(&id) {
                Err(id_error) => id_error.error_response(),
                Ok(_) => body_error.error_response(),
            };
        }
    };

    respond(service.update_user(&id, payload).await)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};
    use crate::db::memory::MemoryExecutor;
    use crate::routes::configure_all_routes;
    use crate::test_support::{service_with, FailingExecutor, RecordingExecutor};
    use super::*;

    macro_rules! app_with {
        ($service:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($service))
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_create_then_list_and_get() {
        let app = app_with!(service_with(Arc::new(MemoryExecutor::new())));

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "username": "alice", "email": "a@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({
                "data": [{ "username": "alice", "email": "a@example.com" }],
                "id": 1,
                "error": null
            })
        );

        let req = test::TestRequest::get().uri("/users").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            body,
            json!({
                "data": [{ "id": 1, "username": "alice", "email": "a@example.com" }],
                "error": null
            })
        );

        let req = test::TestRequest::get().uri("/users/1").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_get_non_numeric_id_is_bad_request() {
        let recorder = Arc::new(RecordingExecutor::new());
        let app = app_with!(service_with(recorder.clone()));

        let req = test::TestRequest::get().uri("/users/abc").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "data": [], "error": "id must be numeric" }));
        assert_eq!(recorder.calls(), 0);
    }

    #[actix_web::test]
    async fn test_get_unknown_id_returns_empty_data() {
        let app = app_with!(service_with(Arc::new(MemoryExecutor::new())));

        let req = test::TestRequest::get().uri("/users/77").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "data": [], "error": null }));
    }

    #[actix_web::test]
    async fn test_create_missing_email_is_bad_request_without_insert() {
        let recorder = Arc::new(RecordingExecutor::new());
        let app = app_with!(service_with(recorder.clone()));

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "username": "alice" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "validation failed");
        assert_eq!(body["errors"], json!([{ "field": "email", "message": "email is required" }]));
        assert_eq!(recorder.calls(), 0);
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let recorder = Arc::new(RecordingExecutor::new());
        let app = app_with!(service_with(recorder.clone()));

        let req = test::TestRequest::post()
            .uri("/users")
            .insert_header(("content-type", "application/json"))
            .set_payload("{ not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"], json!([]));
        assert!(body["error"].as_str().unwrap().starts_with("invalid request body"));
        assert_eq!(recorder.calls(), 0);
    }

    #[actix_web::test]
    async fn test_update_echoes_payload() {
        let app = app_with!(service_with(Arc::new(MemoryExecutor::new())));

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "username": "alice", "email": "a@example.com" }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::put()
            .uri("/users/1")
            .set_json(json!({ "email": "new@example.com" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(
            body,
            json!({ "data": [{ "id": 1, "email": "new@example.com" }], "error": null })
        );
    }

    #[actix_web::test]
    async fn test_update_non_numeric_id_is_bad_request() {
        let app = app_with!(service_with(Arc::new(MemoryExecutor::new())));

        let req = test::TestRequest::put()
            .uri("/users/12a")
            .set_json(json!({ "username": "bob" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "data": [], "error": "id must be numeric" }));
    }

    #[actix_web::test]
    async fn test_update_non_numeric_id_wins_over_bad_body() {
        let recorder = Arc::new(RecordingExecutor::new());
        let app = app_with!(service_with(recorder.clone()));

        let req = test::TestRequest::put().uri("/users/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "data": [], "error": "id must be numeric" }));

        let req = test::TestRequest::put()
            .uri("/users/abc")
            .set_json(json!({ "username": 5 }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({ "data": [], "error": "id must be numeric" }));

        assert_eq!(recorder.calls(), 0);
    }

    #[actix_web::test]
    async fn test_update_bad_body_with_numeric_id_is_bad_request() {
        let recorder = Arc::new(RecordingExecutor::new());
        let app = app_with!(service_with(recorder.clone()));

        let req = test::TestRequest::put()
            .uri("/users/1")
            .set_json(json!({ "username": 5 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"], json!([]));
        assert!(body["error"].as_str().unwrap().starts_with("invalid request body"));
        assert_eq!(recorder.calls(), 0);
    }

    #[actix_web::test]
    async fn test_store_failure_is_json_500() {
        let app = app_with!(service_with(Arc::new(FailingExecutor)));

        let req = test::TestRequest::get().uri("/users").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"], json!([]));
        assert!(body["error"].as_str().unwrap().contains("connection refused"));

        let req = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "username": "alice", "email": "a@example.com" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "data": [], "error": "error saving data" }));
    }

    #[actix_web::test]
    async fn test_health_reports_backend() {
        let app = app_with!(service_with(Arc::new(MemoryExecutor::new())));

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["store"], "memory");
    }
}
