//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`] trait이 도메인 연산과 저장소 사이의 유일한 경계입니다.
//! 두 가지 구현을 제공합니다:
//!
//! - [`MongoUserRepository`](user_repo::MongoUserRepository) - MongoDB 기반 운영 구현
//! - [`InMemoryUserRepository`](memory::InMemoryUserRepository) - 테스트용 인메모리 구현
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{UserRepository, user_repo::MongoUserRepository};
//!
//! let user_repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(&database));
//! let user = user_repo.find_by_email("user@example.com").await?;
//! ```

use async_trait::async_trait;

use crate::domain::entities::users::user::{User, UserRole, UserSummary};
use crate::errors::AppResult;

pub mod memory;
pub mod user_repo;

pub use memory::InMemoryUserRepository;
pub use user_repo::MongoUserRepository;

/// 신규 사용자 생성 입력
///
/// `password`는 평문으로 전달되며, 해싱은 리포지토리 구현 내부에서
/// 단 한 번만 수행됩니다. 호출자는 해시를 다루지 않습니다.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

/// 사용자 부분 수정 입력
///
/// `None`인 필드는 변경하지 않습니다.
/// `password`가 포함된 경우 새로 해싱하여 저장합니다.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<UserRole>,
}

impl UserChanges {
    /// 변경할 필드가 하나도 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.role.is_none()
    }
}

/// 정렬 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    /// 기본 정렬 방향
    #[default]
    Desc,
}

impl SortOrder {
    /// MongoDB 정렬 문서에 쓰이는 정수 표현 (1 / -1)
    pub fn as_i32(&self) -> i32 {
        match self {
            SortOrder::Asc => 1,
            SortOrder::Desc => -1,
        }
    }
}

/// 사용자 검색 조건
///
/// `name`/`email`은 대소문자 무시 부분 일치, `role`/`is_deleted`는 정확 일치이며,
/// 지정하지 않은 필드는 조건에 포함되지 않습니다.
/// 삭제 여부를 지정하지 않으면 소프트 삭제된 사용자도 결과에 포함됩니다.
#[derive(Debug, Clone)]
pub struct UserSearchQuery {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub is_deleted: Option<bool>,
    /// 1부터 시작하는 페이지 번호
    pub page: i64,
    /// 페이지당 결과 수
    pub limit: i64,
    /// 정렬 필드 (저장소 필드명 기준)
    pub sort_by: String,
    pub order: SortOrder,
}

impl Default for UserSearchQuery {
    fn default() -> Self {
        Self {
            name: None,
            email: None,
            role: None,
            is_deleted: None,
            page: 1,
            limit: 10,
            sort_by: "created_at".to_string(),
            order: SortOrder::Desc,
        }
    }
}

impl UserSearchQuery {
    /// 페이지네이션을 위해 건너뛸 문서 수를 계산합니다.
    ///
    /// skip = (page - 1) * limit. 페이지와 limit은 1 미만이 될 수 없습니다.
    pub fn skip(&self) -> u64 {
        let page = self.page.max(1) as u64;
        let limit = self.limit.max(1) as u64;
        (page - 1) * limit
    }

    /// 정렬에 사용할 저장소 필드명을 반환합니다.
    ///
    /// API 표기(`createdAt`, `updatedAt`)는 저장소 필드명으로 변환하고,
    /// 그 외 값은 그대로 사용합니다.
    pub fn sort_field(&self) -> &str {
        match self.sort_by.as_str() {
            "createdAt" | "" => "created_at",
            "updatedAt" => "updated_at",
            other => other,
        }
    }
}

/// 페이지 단위 검색 결과
///
/// 전체 건수와 페이지 수, 요청된 페이지의 축소 뷰 목록을 담습니다.
#[derive(Debug, Clone)]
pub struct UserPage {
    pub total_count: u64,
    pub total_pages: u64,
    pub page: i64,
    pub limit: i64,
    pub data: Vec<UserSummary>,
}

impl UserPage {
    /// 전체 페이지 수를 계산합니다. total_pages = ceil(count / limit)
    pub fn page_count(total_count: u64, limit: i64) -> u64 {
        let limit = limit.max(1) as u64;
        total_count.div_ceil(limit)
    }
}

/// 사용자 저장소 추상화
///
/// 도메인 연산이 저장소에 접근하는 유일한 통로입니다.
/// "찾을 수 없음"은 에러가 아닌 값(`Ok(None)` / `Ok(false)`)으로 표현하고,
/// 저장소 장애만 에러로 전파합니다.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 전체 사용자 목록 조회 (삭제된 사용자 포함)
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// ID로 사용자 조회. 형식이 잘못된 ID는 존재하지 않는 것으로 간주합니다.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 이메일로 사용자 전체 레코드 조회 (로그인 검증용)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 이메일 사용 여부 확인 (중복 가입 방지용)
    async fn email_exists(&self, email: &str) -> AppResult<bool>;

    /// 조건 검색 + 페이지네이션
    async fn search(&self, query: &UserSearchQuery) -> AppResult<UserPage>;

    /// 사용자 생성. 비밀번호는 여기서 해싱되며 ID는 저장소가 할당합니다.
    async fn create(&self, draft: NewUser) -> AppResult<User>;

    /// 부분 수정. 대상이 없으면 `Ok(None)`을 반환합니다.
    async fn update(&self, id: &str, changes: UserChanges) -> AppResult<Option<User>>;

    /// 소프트 삭제. 레코드는 플래그만 바뀐 채 저장소에 남습니다.
    async fn soft_delete(&self, id: &str) -> AppResult<Option<User>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_follows_page_and_limit() {
        let query = UserSearchQuery {
            page: 3,
            limit: 10,
            ..Default::default()
        };
        assert_eq!(query.skip(), 20);

        let first_page = UserSearchQuery::default();
        assert_eq!(first_page.skip(), 0);
    }

    #[test]
    fn test_skip_clamps_invalid_page() {
        let query = UserSearchQuery {
            page: 0,
            limit: 10,
            ..Default::default()
        };
        assert_eq!(query.skip(), 0);

        let negative = UserSearchQuery {
            page: -5,
            limit: 10,
            ..Default::default()
        };
        assert_eq!(negative.skip(), 0);
    }

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(UserPage::page_count(0, 10), 0);
        assert_eq!(UserPage::page_count(1, 10), 1);
        assert_eq!(UserPage::page_count(10, 10), 1);
        assert_eq!(UserPage::page_count(11, 10), 2);
        assert_eq!(UserPage::page_count(25, 10), 3);
    }

    #[test]
    fn test_sort_field_normalizes_api_names() {
        let mut query = UserSearchQuery::default();
        assert_eq!(query.sort_field(), "created_at");

        query.sort_by = "createdAt".to_string();
        assert_eq!(query.sort_field(), "created_at");

        query.sort_by = "updatedAt".to_string();
        assert_eq!(query.sort_field(), "updated_at");

        query.sort_by = "email".to_string();
        assert_eq!(query.sort_field(), "email");
    }

    #[test]
    fn test_changes_emptiness() {
        assert!(UserChanges::default().is_empty());

        let changes = UserChanges {
            name: Some("New Name".to_string()),
            ..Default::default()
        };
        assert!(!changes.is_empty());
    }
}
