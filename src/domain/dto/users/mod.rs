//! # User Data Transfer Objects Module
//!
//! 사용자 관련 API의 요청/응답 데이터 구조를 정의하는 모듈입니다.
//! Spring Framework의 User 관련 DTO와 동일한 역할을 수행하며,
//! 클라이언트와 서버 간의 사용자 데이터 교환을 위한 계약을 정의합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody CreateUserDto` | `CreateUserRequest` | 사용자 생성 요청 |
//! | `@RequestBody UpdateUserDto` | `UpdateUserRequest` | 부분 수정 요청 |
//! | `@ModelAttribute SearchCondition` | `SearchUsersRequest` | 검색 쿼리 바인딩 |
//! | `@ResponseBody UserDto` | `UserResponse` | 사용자 정보 응답 |
//! | `Page<UserDto>` | `SearchUsersResponse` | 페이지네이션 응답 |
//! | 인증 토큰 응답 | `LoginResponse` | 로그인 결과 |
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/                       # 클라이언트 → 서버 요청 DTO
//! │   ├── create_user_request.rs    # 사용자 생성 요청
//! │   ├── update_user_request.rs    # 부분 수정 요청
//! │   ├── search_users_request.rs   # 검색 쿼리 요청
//! │   └── auth_request.rs           # 회원가입/로그인 요청
//! └── response/                      # 서버 → 클라이언트 응답 DTO
//!     └── user_response.rs          # 사용자/검색/로그인 응답
//! ```
//!
//! ## Spring Boot Controller와의 비교
//!
//! ### Spring Boot 예제
//! ```java
//! @RestController
//! @RequestMapping("/api/users")
//! public class UserController {
//!
//!     @PostMapping
//!     public ResponseEntity<UserDto> create(
//!         @Valid @RequestBody CreateUserDto request
//!     ) {
//!         User user = userService.createUser(request);
//!         return ResponseEntity.ok(UserDto.from(user));
//!     }
//!
//!     @GetMapping("/search")
//!     public ResponseEntity<Page<UserDto>> search(
//!         @ModelAttribute SearchCondition condition,
//!         Pageable pageable
//!     ) {
//!         return ResponseEntity.ok(userService.search(condition, pageable));
//!     }
//! }
//! ```
//!
//! ### 이 시스템 예제
//! ```rust,ignore
//! use actix_web::{web, HttpResponse};
//! use validator::Validate;
//! use crate::domain::dto::users::request::{CreateUserRequest, SearchUsersRequest};
//! use crate::errors::AppError;
//!
//! /// 사용자 생성 핸들러 (Spring의 @PostMapping과 동일)
//! pub async fn create_user(
//!     service: web::Data<UserService>,
//!     request: web::Json<CreateUserRequest>,  // @RequestBody와 동일
//! ) -> Result<HttpResponse, AppError> {
//!     let request = request.into_inner();
//!     request.validate()?;                    // @Valid와 동일
//!
//!     let response = service.create_user(request).await?;
//!     Ok(HttpResponse::Ok().json(response))
//! }
//!
//! /// 사용자 검색 핸들러 (Spring의 @ModelAttribute 바인딩과 동일)
//! pub async fn search_users(
//!     service: web::Data<UserService>,
//!     query: web::Query<SearchUsersRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     let query = query.into_inner();
//!     query.validate()?;
//!
//!     let response = service.search_users(&query).await?;
//!     Ok(HttpResponse::Ok().json(response))
//! }
//! ```
//!
//! ## 실제 API 플로우 예제
//!
//! ### 사용자 생성 플로우
//!
//! ```text
//! POST /api/users
//! Content-Type: application/json
//!
//! { "name": "John Doe", "email": "john@example.com",
//!   "password": "secret123", "role": "student" }
//!
//! HTTP/1.1 200 OK
//! { "id": "507f1f77bcf86cd799439011", "name": "John Doe",
//!   "email": "john@example.com", "role": "student",
//!   "isDeleted": false,
//!   "createdAt": "2024-06-01T10:00:00Z", "updatedAt": "2024-06-01T10:00:00Z" }
//! ```
//!
//! ### 검색 플로우
//!
//! ```text
//! GET /api/users/search?name=john&isDeleted=false&page=1&limit=10&sortBy=createdAt&order=desc
//!
//! HTTP/1.1 200 OK
//! { "totalCount": 25, "totalPages": 3, "page": 1, "limit": 10,
//!   "data": [ { "id": "...", "name": "John Doe", "email": "...",
//!               "role": "student", "isDeleted": false } ] }
//! ```
//!
//! ## 검증 규칙 요약
//!
//! - **이름**: 1-50자
//! - **이메일**: RFC 5322 표준 형식
//! - **비밀번호**: 최소 6자
//! - **역할**: `student` / `instructor` / `admin` (닫힌 열거형)
//! - **page/limit**: 숫자 형식 문자열 (쿼리 스트링 특성)
//! - **order**: `asc` / `desc`
//!
//! ## 베스트 프랙티스
//!
//! - **민감 정보 제외**: Response DTO에 비밀번호 해시를 포함하지 않음
//! - **입력 검증**: 모든 Request DTO에 `validate()` 적용 후 서비스로 전달
//! - **네이밍 일관성**: 저장소는 snake_case, API 표면은 camelCase

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
