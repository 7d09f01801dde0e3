//! 초기 데이터 시드 모듈
//!
//! 개발/데모 환경에서 바로 사용할 수 있는 샘플 사용자 두 명을 생성합니다.
//! 시드는 [`UserService`]의 일반 생성 경로를 그대로 통과하므로 비밀번호 해싱과
//! 이메일 중복 거부가 동일하게 적용되며, 이미 존재하는 이메일은 건너뜁니다.
//!
//! `main`에서 `SEED_USERS=true`일 때만 호출됩니다.
//!
//! # Seed Users
//!
//! | 이름 | 이메일 | 비밀번호 | 역할 |
//! |------|--------|----------|------|
//! | John Doe | john.doe@example.com | password123 | student |
//! | Jane Smith | jane.smith@example.com | password456 | instructor |

use crate::domain::dto::users::request::CreateUserRequest;
use crate::errors::{AppError, AppResult};
use crate::services::users::user_service::UserService;

/// 시드 대상 사용자 목록
fn seed_requests() -> Vec<CreateUserRequest> {
    vec![
        CreateUserRequest {
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            password: "password123".to_string(),
            role: "student".to_string(),
        },
        CreateUserRequest {
            name: "Jane Smith".to_string(),
            email: "jane.smith@example.com".to_string(),
            password: "password456".to_string(),
            role: "instructor".to_string(),
        },
    ]
}

/// 샘플 사용자를 생성합니다.
///
/// 사용자별로 생성 또는 건너뜀을 로그로 남기고, 중복 이외의 실패는
/// 그대로 전파합니다. 같은 저장소에 여러 번 실행해도 결과는 같습니다.
///
/// # Examples
///
/// ```rust,ignore
/// use crate::seed::seed_users;
///
/// if SeedConfig::enabled() {
///     seed_users(&user_service).await?;
/// }
/// ```
pub async fn seed_users(user_service: &UserService) -> AppResult<()> {
    log::info!("시드 데이터 생성을 시작합니다");

    for request in seed_requests() {
        let email = request.email.clone();
        match user_service.create_user(request).await {
            Ok(user) => {
                log::info!("시드 사용자 생성: {} ({})", user.name, user.email);
            }
            Err(AppError::ConflictError(_)) => {
                log::info!("시드 사용자 건너뜀 (이미 존재): {}", email);
            }
            Err(e) => return Err(e),
        }
    }

    log::info!("시드 데이터 생성이 완료되었습니다");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::entities::users::user::UserRole;
    use crate::repositories::users::{InMemoryUserRepository, UserRepository};

    /// 테스트에서는 낮은 cost로 해싱 시간을 줄인다
    const TEST_COST: u32 = 4;

    #[actix_web::test]
    async fn test_seed_creates_sample_users() {
        let repo = Arc::new(InMemoryUserRepository::with_cost(TEST_COST));
        let service = UserService::new(repo.clone());

        seed_users(&service).await.unwrap();

        let john = repo.find_by_email("john.doe@example.com").await.unwrap().unwrap();
        assert_eq!(john.name, "John Doe");
        assert_eq!(john.role, UserRole::Student);
        assert_ne!(john.password_hash, "password123");

        let jane = repo.find_by_email("jane.smith@example.com").await.unwrap().unwrap();
        assert_eq!(jane.role, UserRole::Instructor);
    }

    #[actix_web::test]
    async fn test_seed_is_idempotent() {
        let repo = Arc::new(InMemoryUserRepository::with_cost(TEST_COST));
        let service = UserService::new(repo.clone());

        seed_users(&service).await.unwrap();
        seed_users(&service).await.unwrap();

        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }
}
