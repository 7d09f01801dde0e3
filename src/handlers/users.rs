//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 목록/검색/단건 조회, 생성, 부분 수정, 소프트 삭제를 지원하며,
//! RESTful API 설계 원칙을 따릅니다.
//!
//! ## RESTful API 설계
//!
//! ### 현재 구현된 엔드포인트
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | GET | `/api/users` | 전체 사용자 목록 | 200 |
//! | GET | `/api/users/search` | 조건 검색 + 페이지네이션 | 200, 400 |
//! | POST | `/api/users` | 사용자 생성 | 200, 400, 409 |
//! | GET | `/api/users/{user_id}` | 단건 조회 | 200, 404 |
//! | PATCH | `/api/users/{user_id}` | 부분 수정 | 200, 400, 404 |
//! | PATCH | `/api/users/{user_id}/delete` | 소프트 삭제 | 200, 404 |
//!
//! ## Spring MVC와의 비교
//!
//! ### Spring Controller
//! ```java
//! @RestController
//! @RequestMapping("/api/users")
//! public class UserController {
//!
//!     @Autowired
//!     private UserService userService;
//!
//!     @PostMapping
//!     public ResponseEntity<UserResponse> createUser(@Valid @RequestBody CreateUserRequest request) {
//!         return ResponseEntity.ok(userService.createUser(request));
//!     }
//! }
//! ```
//!
//! ### 이 모듈의 Rust 구현
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_user(
//!     service: web::Data<UserService>,       // main에서 주입된 서비스
//!     payload: web::Json<CreateUserRequest>, // 자동 JSON 파싱
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()
//!         .map_err(|e| AppError::ValidationError(e.to_string()))?;
//!     let response = service.create_user(payload.into_inner()).await?;
//!     Ok(HttpResponse::Ok().json(response))
//! }
//! ```
//!
//! `@Autowired` 대신 `web::Data<UserService>` 추출기가 의존성을 가져오고,
//! `@Valid` 대신 핸들러 첫 줄에서 `validate()`를 호출합니다.
//!
//! ## 에러 응답
//!
//! 모든 실패는 [`AppError`]의 `ResponseError` 구현을 거쳐 상태 코드와
//! `{"error": "..."}` 본문으로 변환됩니다. 핸들러는 상태 코드를 직접
//! 다루지 않습니다.

use actix_web::{web, HttpResponse, get, patch, post};
use validator::Validate;

use crate::domain::dto::users::request::{
    CreateUserRequest, SearchUsersRequest, UpdateUserRequest,
};
use crate::errors::AppError;
use crate::services::users::user_service::UserService;

/// 사용자 목록 조회 핸들러
///
/// 소프트 삭제된 계정을 포함한 전체 사용자를 반환합니다.
/// 페이지네이션이 없으므로 운영 도구나 소규모 데이터 전용입니다.
///
/// # 엔드포인트
///
/// `GET /users`
#[get("")]
pub async fn list_users(
    service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let users = service.list_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 검색 핸들러
///
/// 이름/이메일 부분 일치, 역할과 삭제 플래그 정확 일치 조건으로
/// 페이지네이션 검색을 수행합니다.
///
/// # 엔드포인트
///
/// `GET /users/search?name=&email=&role=&isDeleted=&page=&limit=&sortBy=&order=`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "totalCount": 42,
///   "totalPages": 5,
///   "page": 1,
///   "limit": 10,
///   "data": [
///     {
///       "id": "507f1f77bcf86cd799439011",
///       "name": "John Doe",
///       "email": "john.doe@example.com",
///       "role": "student",
///       "isDeleted": false
///     }
///   ]
/// }
/// ```
///
/// ## 검증 실패 (400 Bad Request)
/// ```json
/// { "error": "Validation error: page: 숫자 형식의 문자열이어야 합니다" }
/// ```
///
/// # 사용 예제
///
/// ```bash
/// curl "http://localhost:5000/api/users/search?role=student&page=2&limit=5&order=asc"
/// ```
#[get("/search")]
pub async fn search_users(
    service: web::Data<UserService>,
    query: web::Query<SearchUsersRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let page = service.search_users(&query).await?;

    Ok(HttpResponse::Ok().json(page))
}

/// 사용자 생성 핸들러
///
/// 새로운 사용자 계정을 생성합니다. 이메일 중복과 빈 비밀번호는
/// 서비스 계층에서 거부되고, 형식 검증은 이 핸들러에서 수행됩니다.
///
/// # 엔드포인트
///
/// `POST /users`
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "John Doe",
///   "email": "john.doe@example.com",
///   "password": "password123",
///   "role": "student"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "id": "507f1f77bcf86cd799439011",
///   "name": "John Doe",
///   "email": "john.doe@example.com",
///   "role": "student",
///   "isDeleted": false,
///   "createdAt": "2024-01-01T00:00:00Z",
///   "updatedAt": "2024-01-01T00:00:00Z"
/// }
/// ```
///
/// ## 실패 사례
///
/// ### 중복 이메일 (409 Conflict)
/// ```json
/// { "error": "Conflict error: 이미 사용 중인 이메일입니다" }
/// ```
///
/// ### 검증 실패 (400 Bad Request)
/// ```json
/// { "error": "Validation error: password: 비밀번호는 최소 6자 이상이어야 합니다" }
/// ```
///
/// # 보안 고려사항
///
/// - 비밀번호는 bcrypt로 해시되어 저장되며 응답에 포함되지 않음
/// - 비밀번호는 평문으로 로그에 기록되지 않음
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:5000/api/users \
///   -H "Content-Type: application/json" \
///   -d '{
///     "name": "John Doe",
///     "email": "john.doe@example.com",
///     "password": "password123",
///     "role": "student"
///   }'
/// ```
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 사용자 단건 조회 핸들러
///
/// 지정된 ID의 사용자 정보를 조회합니다. 소프트 삭제된 계정도
/// 그대로 반환됩니다 (`isDeleted: true`).
///
/// # 엔드포인트
///
/// `GET /users/{user_id}`
///
/// # 실패 사례
///
/// ### 사용자 없음 (404 Not Found)
/// ```json
/// { "error": "Not found: 사용자를 찾을 수 없습니다" }
/// ```
///
/// 형식이 잘못된 ID도 같은 404로 응답합니다.
#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user_by_id(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 부분 수정 핸들러
///
/// 본문에 포함된 필드만 수정합니다. 생략된 필드는 기존 값을 유지하며,
/// 비밀번호가 포함되면 다시 해시되어 저장됩니다.
///
/// # 엔드포인트
///
/// `PATCH /users/{user_id}`
///
/// # 요청 본문
///
/// ```json
/// { "name": "Jane Doe", "role": "instructor" }
/// ```
///
/// # 응답
///
/// 성공 시 수정이 반영된 전체 사용자 레코드를 반환합니다 (200 OK).
/// 존재하지 않는 ID는 404로 응답합니다.
#[patch("/{user_id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = service.update_user(&user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 사용자 소프트 삭제 핸들러
///
/// 레코드를 물리적으로 제거하지 않고 `isDeleted` 플래그만 올립니다.
/// 삭제 후에도 단건 조회와 목록에는 계속 나타나며, 로그인만 차단됩니다.
///
/// # 엔드포인트
///
/// `PATCH /users/{user_id}/delete`
///
/// # 응답
///
/// 성공 시 `isDeleted: true`가 반영된 레코드를 반환합니다 (200 OK).
/// 이미 삭제된 사용자에 다시 호출해도 같은 응답입니다 (멱등).
///
/// # 사용 예제
///
/// ```bash
/// curl -X PATCH http://localhost:5000/api/users/507f1f77bcf86cd799439011/delete
/// ```
#[patch("/{user_id}/delete")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let response = service.delete_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(response))
}
