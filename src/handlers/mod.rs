//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행하며,
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities - 도메인 모델                         ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! ### Spring MVC Controller
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
//!         UserResponse response = userService.createUser(request);
//!         return ResponseEntity.ok(response);
//!     }
//!
//!     @GetMapping("/{id}")
//!     public ResponseEntity<UserResponse> getUser(@PathVariable String id) {
//!         UserResponse user = userService.getUserById(id);
//!         return ResponseEntity.ok(user);
//!     }
//! }
//! ```
//!
//! ### 이 모듈의 Rust 구현
//! ```rust,ignore
//! use actix_web::{web, HttpResponse, get, post};
//! use crate::services::users::user_service::UserService;
//!
//! #[post("")]
//! pub async fn create_user(
//!     service: web::Data<UserService>,       // main에서 조립된 서비스 주입
//!     payload: web::Json<CreateUserRequest>, // 자동 JSON 파싱
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate()
//!         .map_err(|e| AppError::ValidationError(e.to_string()))?;
//!     let response = service.create_user(payload.into_inner()).await?;
//!     Ok(HttpResponse::Ok().json(response))
//! }
//!
//! #[get("/{user_id}")]
//! pub async fn get_user(
//!     service: web::Data<UserService>,
//!     user_id: web::Path<String>,
//! ) -> Result<HttpResponse, AppError> {
//!     let user = service.get_user_by_id(&user_id).await?;
//!     Ok(HttpResponse::Ok().json(user))
//! }
//! ```
//!
//! ## 주요 특징
//!
//! ### 1. 비동기 처리
//! - **Future 기반**: 모든 핸들러가 `async/await` 사용
//! - **논블로킹 I/O**: 데이터베이스 호출 시 블로킹 없음
//! - **높은 처리량**: 적은 스레드로 많은 동시 요청 처리
//!
//! ### 2. 타입 안전성
//! - **컴파일 타임 검증**: 요청/응답 타입 검증
//! - **자동 직렬화**: JSON ↔ Rust 구조체 자동 변환
//! - **검증 통합**: validator 크레이트로 입력 검증
//!
//! ```rust,ignore
//! #[derive(Deserialize, Validate)]
//! pub struct CreateUserRequest {
//!     #[validate(email)]
//!     pub email: String,
//!
//!     #[validate(length(min = 6))]
//!     pub password: String,
//! }
//! ```
//!
//! ### 3. 에러 처리
//! - **Result 패턴**: Rust의 에러 처리 관용구 활용
//! - **자동 변환**: `?` 연산자로 에러 자동 전파
//! - **통합 에러 타입**: [`AppError`](crate::errors::AppError)의
//!   `ResponseError` 구현이 상태 코드 매핑을 담당
//!
//! ## 모듈 구성
//!
//! - **`users`**: 사용자 관리 엔드포인트
//!   - 목록 조회 (`GET /users`)
//!   - 조건 검색 (`GET /users/search`)
//!   - 사용자 생성 (`POST /users`)
//!   - 단건 조회 (`GET /users/{id}`)
//!   - 부분 수정 (`PATCH /users/{id}`)
//!   - 소프트 삭제 (`PATCH /users/{id}/delete`)
//!
//! - **`auth`**: 인증 엔드포인트
//!   - 회원가입 (`POST /auth/register`)
//!   - 로그인 (`POST /auth/login`)
//!
//! ## 의존성 주입
//!
//! 서비스 인스턴스는 `main`에서 한 번 조립되어 `web::Data`로 공유됩니다.
//!
//! ```rust,ignore
//! let user_repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(&database));
//! let user_service = web::Data::new(UserService::new(user_repo.clone()));
//! let auth_service = web::Data::new(AuthService::new(user_repo));
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(user_service.clone())
//!         .app_data(auth_service.clone())
//!         .configure(routes::configure_all_routes)
//! })
//! ```
//!
//! 같은 저장소 트레잇을 구현한 인메모리 리포지토리를 주입하면
//! 핸들러 테스트가 MongoDB 없이 전체 HTTP 플로우를 검증할 수 있습니다.

pub mod users;
pub mod auth;
