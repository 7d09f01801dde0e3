//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 사용자, 인증 관련 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - 사용자 CRUD + 검색 API 엔드포인트 (`/api/users`)
//! - 이메일/비밀번호 인증 API 엔드포인트 (`/api/auth`)
//! - 헬스체크 엔드포인트 (`/health`, `/api` 프리픽스 밖)
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_user_routes(cfg);
    configure_auth_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// 사용자 목록/검색/단건 조회, 생성, 부분 수정, 소프트 삭제 엔드포인트를 등록합니다.
///
/// # Route Groups
///
/// - `GET   /api/users` - 전체 목록
/// - `GET   /api/users/search` - 조건 검색 + 페이지네이션
/// - `POST  /api/users` - 사용자 생성
/// - `GET   /api/users/{user_id}` - 단건 조회
/// - `PATCH /api/users/{user_id}` - 부분 수정
/// - `PATCH /api/users/{user_id}/delete` - 소프트 삭제
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```bash
/// curl http://localhost:5000/api/users
///
/// curl "http://localhost:5000/api/users/search?role=student&page=1&limit=10"
///
/// curl -X POST http://localhost:5000/api/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"John Doe","email":"john.doe@example.com","password":"password123","role":"student"}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::list_users)
            // 등록 순서가 곧 매칭 순서다. /search는 /{user_id}보다 먼저 등록한다
            .service(handlers::users::search_users)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user)
    );
}

/// 인증 관련 라우트를 설정합니다
///
/// 회원가입과 로그인 엔드포인트를 등록합니다.
/// 모든 인증 라우트는 Public 접근이 가능합니다 (인증을 위한 엔드포인트이므로).
///
/// # Available Routes
///
/// - `POST /api/auth/register` - 이메일/비밀번호 회원가입
/// - `POST /api/auth/login` - 이메일/비밀번호 로그인
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```bash
/// # 회원가입
/// curl -X POST http://localhost:5000/api/auth/register \
///   -H "Content-Type: application/json" \
///   -d '{"name":"John Doe","email":"john.doe@example.com","password":"password123"}'
///
/// # 로그인
/// curl -X POST http://localhost:5000/api/auth/login \
///   -H "Content-Type: application/json" \
///   -d '{"email":"john.doe@example.com","password":"password123"}'
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(handlers::auth::register)
            .service(handlers::auth::login)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Returns
///
/// * `HttpResponse` - 서비스 상태 정보를 포함한 JSON 응답
///   - `status`: 서비스 상태 ("healthy")
///   - `service`: 서비스 이름
///   - `version`: 현재 버전
///   - `timestamp`: 응답 시각
///   - `features`: 사용 중인 기술 스택
///
/// # Examples
///
/// ```bash
/// curl http://localhost:5000/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "account_service_backend",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "dependency_injection": "Explicit (web::Data)"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "account_service_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "dependency_injection": "Explicit (web::Data)"
        }
    }))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    use super::*;

    #[actix_web::test]
    async fn test_health_check_reports_healthy() {
        let app = test::init_service(App::new().service(health_check)).await;

        let request = test::TestRequest::get().uri("/health").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "account_service_backend");
        assert!(!body["timestamp"].as_str().unwrap().is_empty());
    }
}
