//! Authentication HTTP Handlers
//!
//! 사용자 인증과 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 이메일/비밀번호 기반의 최소 인증 플로우를 구현합니다.
//!
//! # Endpoints
//!
//! - **회원가입**: 이메일/비밀번호 계정 생성 (`POST /auth/register`)
//! - **로그인**: 비밀번호 검증 후 플레이스홀더 토큰 반환 (`POST /auth/login`)
use actix_web::{post, web, HttpResponse};
use validator::Validate;

use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};
use crate::errors::AppError;
use crate::services::auth::AuthService;

/// 회원가입 핸들러
///
/// 이메일/비밀번호로 새 계정을 생성합니다. 역할을 생략하면 `student`로
/// 생성됩니다. 사용자 생성 API와 달리 이메일 중복 검사는 하지 않습니다.
///
/// # Endpoint
/// `POST /auth/register`
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "John Doe",
///   "email": "john.doe@example.com",
///   "password": "password123"
/// }
/// ```
///
/// # 응답
///
/// 성공 시 201 Created와 생성된 사용자 정보(비밀번호 해시 제외)를 반환합니다.
#[post("/register")]
pub async fn register(
    service: web::Data<AuthService>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 로그인 핸들러
///
/// 이메일과 비밀번호를 검증하고, 성공하면 플레이스홀더 토큰을 반환합니다.
///
/// # Endpoint
/// `POST /auth/login`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// { "token": "generated-jwt-token" }
/// ```
///
/// ## 실패 (401 Unauthorized)
///
/// 없는 이메일, 비밀번호 불일치, 삭제된 계정 모두 같은 응답입니다.
/// ```json
/// { "error": "Authentication error: 잘못된 이메일 또는 비밀번호입니다" }
/// ```
#[post("/login")]
pub async fn login(
    service: web::Data<AuthService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};

    use crate::repositories::users::InMemoryUserRepository;
    use crate::routes::configure_all_routes;
    use crate::services::auth::AuthService;
    use crate::services::users::user_service::UserService;

    /// 테스트에서는 낮은 cost로 해싱 시간을 줄인다
    const TEST_COST: u32 = 4;

    fn app_data() -> (web::Data<UserService>, web::Data<AuthService>) {
        let repo = Arc::new(InMemoryUserRepository::with_cost(TEST_COST));
        (
            web::Data::new(UserService::new(repo.clone())),
            web::Data::new(AuthService::new(repo)),
        )
    }

    #[actix_web::test]
    async fn test_register_returns_201_with_student_default() {
        let (user_service, auth_service) = app_data();
        let app = test::init_service(
            App::new()
                .app_data(user_service)
                .app_data(auth_service)
                .configure(configure_all_routes),
        )
        .await;

        let request = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "name": "John Doe",
                "email": "john.doe@example.com",
                "password": "password123"
            }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["role"], "student");
        assert_eq!(body["isDeleted"], false);
        assert!(!body.to_string().contains("password"));
    }

    #[actix_web::test]
    async fn test_login_roundtrip_returns_token() {
        let (user_service, auth_service) = app_data();
        let app = test::init_service(
            App::new()
                .app_data(user_service)
                .app_data(auth_service)
                .configure(configure_all_routes),
        )
        .await;

        let register = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "name": "John Doe",
                "email": "john.doe@example.com",
                "password": "password123"
            }))
            .to_request();
        assert_eq!(
            test::call_service(&app, register).await.status(),
            StatusCode::CREATED
        );

        let login = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "john.doe@example.com",
                "password": "password123"
            }))
            .to_request();
        let response = test::call_service(&app, login).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(response).await;
        assert_eq!(body["token"], "generated-jwt-token");
    }

    #[actix_web::test]
    async fn test_login_with_wrong_password_returns_401() {
        let (user_service, auth_service) = app_data();
        let app = test::init_service(
            App::new()
                .app_data(user_service)
                .app_data(auth_service)
                .configure(configure_all_routes),
        )
        .await;

        let register = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(serde_json::json!({
                "name": "John Doe",
                "email": "john.doe@example.com",
                "password": "password123"
            }))
            .to_request();
        assert_eq!(
            test::call_service(&app, register).await.status(),
            StatusCode::CREATED
        );

        let login = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(serde_json::json!({
                "email": "john.doe@example.com",
                "password": "wrong-password"
            }))
            .to_request();
        assert_eq!(
            test::call_service(&app, login).await.status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
