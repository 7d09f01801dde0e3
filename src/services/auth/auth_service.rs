//! # 인증 서비스
//!
//! 이메일/비밀번호 기반의 최소 인증 흐름(회원가입, 로그인)을 담당합니다.
//!
//! ## 인증 흐름
//!
//! ```text
//! POST /api/auth/register ──▶ AuthService::register ──▶ UserRepository::create (bcrypt 해싱)
//! POST /api/auth/login    ──▶ AuthService::login    ──▶ UserRepository::find_by_email
//!                                                       + bcrypt 검증
//! ```
//!
//! ## 실패 동작
//!
//! 로그인 실패는 원인(없는 이메일, 비밀번호 불일치, 삭제된 계정)과 무관하게
//! 동일한 메시지로 응답하며, 어떤 실패 경로든 bcrypt 비교를 정확히 한 번 거칩니다.
//!
//! ## 토큰
//!
//! 실제 토큰 발급은 이 서비스의 범위 밖입니다. 로그인 성공 시 고정된
//! 플레이스홀더 문자열을 반환합니다.

use std::sync::Arc;

use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};
use crate::domain::dto::users::response::{LoginResponse, UserResponse};
use crate::domain::entities::users::user::UserRole;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::{NewUser, UserRepository};

/// 로그인 실패 시 공통으로 사용하는 메시지
///
/// 없는 이메일, 비밀번호 불일치, 삭제된 계정 모두 이 메시지 하나로 응답합니다.
const INVALID_CREDENTIALS: &str = "잘못된 이메일 또는 비밀번호입니다";

/// 존재하지 않는 이메일 경로의 검증 비용을 맞추기 위한 더미 bcrypt 해시 (cost 10)
const DUMMY_PASSWORD_HASH: &str = "$2a$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";

/// 로그인 성공 시 반환하는 플레이스홀더 토큰 값
const PLACEHOLDER_TOKEN: &str = "generated-jwt-token";

/// 인증 서비스
///
/// Spring Security의 `AuthenticationManager` + `UserDetailsService` 조합에서
/// 자격 증명 검증만 떼어낸 최소 구현입니다. 세션이나 토큰 상태를 들고 있지 않으며,
/// 사용자 저장소 하나에만 의존합니다.
///
/// # Examples
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use crate::repositories::users::MongoUserRepository;
/// use crate::services::auth::AuthService;
///
/// let user_repo = Arc::new(MongoUserRepository::new(&database));
/// let auth_service = AuthService::new(user_repo);
///
/// let response = auth_service.login(request).await?;
/// println!("token: {}", response.token);
/// ```
pub struct AuthService {
    /// 사용자 데이터 액세스 리포지토리
    user_repo: Arc<dyn UserRepository>,
}

impl AuthService {
    /// 인증 서비스 인스턴스를 생성합니다.
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 회원가입
    ///
    /// 이름/이메일/비밀번호/역할로 새 사용자를 생성합니다. 역할은 선택 입력이며,
    /// 생략하면 `student`로 생성됩니다. 비밀번호 해싱은 리포지토리의 생성 경로에서
    /// 한 번만 수행됩니다.
    ///
    /// 사용자 생성([`UserService::create_user`](crate::services::users::UserService::create_user))과
    /// 달리 이메일 중복 검사는 하지 않습니다. 같은 이메일로 여러 번 가입하면
    /// 문서가 여러 개 쌓입니다.
    ///
    /// # 인자
    /// * `request` - 검증을 통과한 회원가입 요청
    ///
    /// # 반환값
    /// * `Ok(UserResponse)` - 생성된 사용자 정보 (비밀번호 해시 제외)
    /// * `Err(AppError::ValidationError)` - 역할이 닫힌 집합을 벗어난 경우
    /// * `Err(AppError::DatabaseError)` - 저장 실패
    pub async fn register(&self, request: RegisterRequest) -> AppResult<UserResponse> {
        let start_time = std::time::Instant::now();

        let role = match request.role.as_deref() {
            Some(value) => UserRole::parse(value).ok_or_else(|| {
                AppError::ValidationError(
                    "역할은 student, instructor, admin 중 하나여야 합니다".to_string(),
                )
            })?,
            None => UserRole::Student,
        };

        let draft = NewUser {
            name: request.name,
            email: request.email,
            password: request.password,
            role,
        };

        let created = self.user_repo.create(draft).await?;

        log::info!("Total user registration took: {:?}", start_time.elapsed());

        Ok(UserResponse::from(created))
    }

    /// 로그인
    ///
    /// 이메일로 사용자를 찾아 비밀번호 해시를 검증하고, 성공하면 플레이스홀더
    /// 토큰을 반환합니다.
    ///
    /// # 실패 경로
    ///
    /// 아래 세 경우 모두 같은 [`AppError::AuthenticationError`] 메시지로 실패합니다.
    ///
    /// - 해당 이메일의 사용자가 없음
    /// - 비밀번호 불일치
    /// - 소프트 삭제된 계정
    ///
    /// # 성능 모니터링
    ///
    /// ```text
    /// [DEBUG] Password verification took: 142ms
    /// [DEBUG] Total login took: 167ms
    /// ```
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        let start_time = std::time::Instant::now();

        let Some(user) = self.user_repo.find_by_email(&request.email).await? else {
            // 존재하지 않는 이메일도 해시 비교 한 번과 같은 비용이 들게 한다
            let _ = bcrypt::verify(&request.password, DUMMY_PASSWORD_HASH);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        };

        let verify_start = std::time::Instant::now();
        let is_valid = bcrypt::verify(&request.password, &user.password_hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        // 삭제 계정 검사는 해시 비교 뒤에 수행한다. 어떤 실패 경로든 비교 한 번을 거친다.
        if !is_valid || user.is_deleted {
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        log::info!("로그인 성공: {}", user.email);
        log::debug!("Total login took: {:?}", start_time.elapsed());

        Ok(LoginResponse {
            token: PLACEHOLDER_TOKEN.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users::InMemoryUserRepository;

    /// 테스트에서는 낮은 cost로 해싱 시간을 줄인다
    const TEST_COST: u32 = 4;

    fn service() -> (AuthService, Arc<InMemoryUserRepository>) {
        let repo = Arc::new(InMemoryUserRepository::with_cost(TEST_COST));
        (AuthService::new(repo.clone()), repo)
    }

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            name: "John Doe".to_string(),
            email: email.to_string(),
            password: "password123".to_string(),
            role: None,
        }
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[actix_web::test]
    async fn test_register_defaults_to_student_role() {
        let (auth, repo) = service();

        let response = auth.register(register_request("john@example.com")).await.unwrap();
        assert_eq!(response.role, UserRole::Student);

        // 저장된 해시는 평문이 아니고, 원래 비밀번호로 검증 가능해야 한다 (단일 해싱)
        let stored = repo.find_by_email("john@example.com").await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "password123");
        assert!(bcrypt::verify("password123", &stored.password_hash).unwrap());
    }

    #[actix_web::test]
    async fn test_register_accepts_explicit_role() {
        let (auth, _repo) = service();

        let request = RegisterRequest {
            role: Some("instructor".to_string()),
            ..register_request("jane@example.com")
        };
        let response = auth.register(request).await.unwrap();
        assert_eq!(response.role, UserRole::Instructor);
    }

    #[actix_web::test]
    async fn test_register_does_not_guard_duplicate_email() {
        let (auth, repo) = service();

        auth.register(register_request("john@example.com")).await.unwrap();
        auth.register(register_request("john@example.com")).await.unwrap();

        // 회원가입 경로는 중복 검사를 하지 않으므로 문서가 두 개 쌓인다
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_login_returns_placeholder_token() {
        let (auth, _repo) = service();
        auth.register(register_request("john@example.com")).await.unwrap();

        let response = auth
            .login(login_request("john@example.com", "password123"))
            .await
            .unwrap();
        assert_eq!(response.token, "generated-jwt-token");
    }

    #[actix_web::test]
    async fn test_login_failures_are_indistinguishable() {
        let (auth, _repo) = service();
        auth.register(register_request("john@example.com")).await.unwrap();

        let wrong_password = auth
            .login(login_request("john@example.com", "wrong-password"))
            .await
            .unwrap_err();
        let unknown_email = auth
            .login(login_request("ghost@example.com", "password123"))
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AppError::AuthenticationError(_)));
        assert!(matches!(unknown_email, AppError::AuthenticationError(_)));
        assert_eq!(wrong_password.to_string(), unknown_email.to_string());
    }

    #[actix_web::test]
    async fn test_login_rejects_soft_deleted_account() {
        let (auth, repo) = service();
        auth.register(register_request("john@example.com")).await.unwrap();

        let stored = repo.find_by_email("john@example.com").await.unwrap().unwrap();
        repo.soft_delete(&stored.id_string().unwrap()).await.unwrap();

        let deleted = auth
            .login(login_request("john@example.com", "password123"))
            .await
            .unwrap_err();
        let unknown = auth
            .login(login_request("ghost@example.com", "password123"))
            .await
            .unwrap_err();

        // 올바른 비밀번호라도 삭제된 계정은 다른 실패와 같은 메시지로 거부된다
        assert_eq!(deleted.to_string(), unknown.to_string());
    }
}
