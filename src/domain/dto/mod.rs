//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! Spring Framework의 `@RequestBody`, `@ResponseBody`와 동일한 역할을 수행하며,
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody` | `request` 모듈 | HTTP 요청 본문 매핑 |
//! | `@ModelAttribute` | `web::Query` + request DTO | 쿼리 스트링 매핑 |
//! | `@ResponseBody` | `response` 모듈 | HTTP 응답 본문 매핑 |
//! | `@Valid` | `validator` crate | 입력값 유효성 검증 |
//! | `@JsonProperty` | `serde` annotations | JSON 필드 매핑 |
//! | `ResponseEntity<T>` | `Result<T, AppError>` | 상태 코드와 함께 응답 |
//!
//! ## 설계 원칙
//!
//! ### 1. API 계약 우선 (API Contract First)
//! - **명시적 인터페이스**: 클라이언트가 기대할 수 있는 명확한 데이터 구조
//! - **네이밍**: API 표면은 camelCase, 저장 문서는 snake_case
//! - **문서화**: rustdoc 주석이 API 문서의 기반
//!
//! ### 2. 유효성 검증 내장 (Built-in Validation)
//! - **타입 안전성**: 컴파일 타임 타입 검증
//! - **런타임 검증**: validator crate를 통한 형식 규칙 검증
//! - **에러 메시지**: 사용자 친화적인 한국어 검증 실패 메시지
//!
//! ### 3. 도메인 분리 (Domain Separation)
//! - **내부 표현 vs 외부 표현**: Entity와 DTO의 명확한 분리
//! - **보안**: 비밀번호 해시가 응답 계약에 존재하지 않음
//! - **진화 가능성**: 내부 구조 변경이 API에 미치는 영향 최소화
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! └── users/              # 사용자 관련 DTO
//!     ├── request/        # 요청 DTO (클라이언트 → 서버)
//!     │   ├── create_user_request.rs
//!     │   ├── update_user_request.rs
//!     │   ├── search_users_request.rs
//!     │   └── auth_request.rs
//!     └── response/       # 응답 DTO (서버 → 클라이언트)
//!         └── user_response.rs
//! ```
//!
//! ## DTO 작성 가이드
//!
//! ### 1. Request DTO 작성
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//! use validator::Validate;
//!
//! /// 사용자 생성 요청 DTO
//! ///
//! /// Spring의 @RequestBody CreateUserRequest와 동일한 역할
//! #[derive(Debug, Clone, Serialize, Deserialize, Validate)]
//! pub struct CreateUserRequest {
//!     /// 사용자 이름
//!     #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
//!     pub name: String,
//!
//!     /// 사용자 이메일 (중복 검사는 서비스 계층에서 수행)
//!     #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
//!     pub email: String,
//!
//!     /// 비밀번호 (평문, 저장 시점에 해싱됨)
//!     #[validate(length(min = 6, message = "비밀번호는 최소 6자 이상이어야 합니다"))]
//!     pub password: String,
//! }
//! ```
//!
//! ### 2. Response DTO 작성
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//!
//! /// 사용자 응답 DTO
//! ///
//! /// 민감한 정보(비밀번호 해시)는 변환 단계에서 제거
//! #[derive(Debug, Clone, Serialize, Deserialize)]
//! #[serde(rename_all = "camelCase")]
//! pub struct UserResponse {
//!     pub id: String,
//!     pub name: String,
//!     pub email: String,
//!     pub role: UserRole,
//!     pub is_deleted: bool,
//!     /// ISO 8601 / RFC 3339 형식
//!     pub created_at: String,
//!     pub updated_at: String,
//! }
//!
//! impl From<User> for UserResponse {
//!     fn from(user: User) -> Self { /* 해시 제외 변환 */ }
//! }
//! ```
//!
//! ## 유효성 검증 (Validation)
//!
//! ### Spring Validation vs Rust Validator
//!
//! | Spring | Rust | 설명 |
//! |--------|------|------|
//! | `@NotNull` | 기본 동작 | Option<T>가 아닌 필드는 필수 |
//! | `@NotBlank` | `#[validate(length(min = 1))]` | 빈 문자열 방지 |
//! | `@Email` | `#[validate(email)]` | 이메일 형식 검증 |
//! | `@Size(min, max)` | `#[validate(length(min, max))]` | 문자열 길이 검증 |
//! | `@IsEnum` | `#[validate(custom(...))]` | 닫힌 열거형 검증 |
//! | `@IsNumberString` | `#[validate(custom(...))]` | 숫자 형식 문자열 검증 |
//!
//! ## 베스트 프랙티스
//!
//! ### 1. 명명 규칙
//! - **Request DTO**: `{Action}{Entity}Request` (예: `CreateUserRequest`)
//! - **Response DTO**: `{Entity}Response` (예: `UserResponse`)
//! - **검색 응답**: `Search{Entity}Response` (예: `SearchUsersResponse`)
//!
//! ### 2. 필드 설계
//! - **필수 필드**: 기본 타입 사용 (`String`, `i64` 등)
//! - **선택적 필드**: `Option<T>` 사용
//! - **민감한 정보**: Response DTO에서 제외
//! - **날짜/시간**: RFC 3339 문자열 형식 사용
//!
//! ### 3. 변환 패턴
//! - **Request → 저장 입력**: 서비스 계층에서 `NewUser`/`UserChanges`로 변환
//! - **Entity → Response**: `impl From<Entity> for Response`
//! - **쿼리 DTO → 검색 조건**: `SearchUsersRequest::to_query()`

pub mod users;

// 공통 re-exports
pub use users::*;
