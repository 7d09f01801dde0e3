//! # 사용자 리포지토리 인메모리 구현
//!
//! MongoDB 없이 [`UserRepository`] 계약을 그대로 구현하는 테스트 대역입니다.
//! 서비스와 핸들러 테스트가 외부 인프라 없이 동작하도록 하며,
//! 검색/정렬/페이지네이션의 축소 의미도 MongoDB 구현과 동일하게 유지합니다.
//!
//! 프로덕션 코드 경로에서는 사용하지 않습니다.

use std::cmp::Ordering;
use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{DateTime, oid::ObjectId};

use crate::config::PasswordConfig;
use crate::domain::entities::users::user::{User, UserSummary};
use crate::errors::{AppError, AppResult};
use crate::repositories::users::{
    NewUser, SortOrder, UserChanges, UserPage, UserRepository, UserSearchQuery,
};

/// 사용자 데이터 액세스 리포지토리 (인메모리)
///
/// `Mutex<Vec<User>>` 위에서 [`UserRepository`]의 모든 연산을 구현합니다.
/// 비밀번호 해싱 비용은 테스트에서 낮출 수 있습니다.
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
    bcrypt_cost: u32,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::with_cost(PasswordConfig::bcrypt_cost())
    }

    /// 지정한 bcrypt 비용으로 생성합니다. 테스트에서는 최소 비용(4)을 권장합니다.
    pub fn with_cost(bcrypt_cost: u32) -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            bcrypt_cost,
        }
    }

    fn hash_password(&self, password: &str) -> AppResult<String> {
        bcrypt::hash(password, self.bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))
    }

    /// MongoDB 필터와 동일한 일치 규칙: 이름/이메일은 대소문자 무시 부분 일치,
    /// 역할/삭제 플래그는 정확 일치.
    fn matches(user: &User, query: &UserSearchQuery) -> bool {
        if let Some(ref name) = query.name {
            if !user.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }

        if let Some(ref email) = query.email {
            if !user.email.to_lowercase().contains(&email.to_lowercase()) {
                return false;
            }
        }

        if let Some(role) = query.role {
            if user.role != role {
                return false;
            }
        }

        if let Some(is_deleted) = query.is_deleted {
            if user.is_deleted != is_deleted {
                return false;
            }
        }

        true
    }

    fn compare(a: &User, b: &User, field: &str) -> Ordering {
        match field {
            "name" => a.name.cmp(&b.name),
            "email" => a.email.cmp(&b.email),
            "updated_at" => a.updated_at.cmp(&b.updated_at),
            _ => a.created_at.cmp(&b.created_at),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.clone())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        // 형식이 잘못된 ID는 어떤 레코드와도 일치하지 않는다
        Ok(users
            .iter()
            .find(|u| u.id_string().as_deref() == Some(id))
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn email_exists(&self, email: &str) -> AppResult<bool> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().any(|u| u.email == email))
    }

    async fn search(&self, query: &UserSearchQuery) -> AppResult<UserPage> {
        let users = self.users.lock().unwrap();

        let mut matched: Vec<&User> = users.iter().filter(|u| Self::matches(u, query)).collect();

        let field = query.sort_field();
        matched.sort_by(|a, b| {
            let ordering = Self::compare(a, b, field);
            match query.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let total_count = matched.len() as u64;
        let limit = query.limit.max(1);
        let page = query.page.max(1);

        let data: Vec<UserSummary> = matched
            .into_iter()
            .skip(query.skip() as usize)
            .take(limit as usize)
            .map(UserSummary::from)
            .collect();

        Ok(UserPage {
            total_count,
            total_pages: UserPage::page_count(total_count, limit),
            page,
            limit,
            data,
        })
    }

    async fn create(&self, draft: NewUser) -> AppResult<User> {
        let password_hash = self.hash_password(&draft.password)?;

        let mut user = User::new(draft.name, draft.email, password_hash, draft.role);
        user.id = Some(ObjectId::new());

        let mut users = self.users.lock().unwrap();
        users.push(user.clone());

        Ok(user)
    }

    async fn update(&self, id: &str, changes: UserChanges) -> AppResult<Option<User>> {
        let password_hash = match changes.password {
            Some(ref password) => Some(self.hash_password(password)?),
            None => None,
        };

        let mut users = self.users.lock().unwrap();

        let Some(user) = users
            .iter_mut()
            .find(|u| u.id_string().as_deref() == Some(id))
        else {
            return Ok(None);
        };

        if let Some(name) = changes.name {
            user.name = name;
        }
        if let Some(email) = changes.email {
            user.email = email;
        }
        if let Some(hash) = password_hash {
            user.password_hash = hash;
        }
        if let Some(role) = changes.role {
            user.role = role;
        }
        user.updated_at = DateTime::now();

        Ok(Some(user.clone()))
    }

    async fn soft_delete(&self, id: &str) -> AppResult<Option<User>> {
        let mut users = self.users.lock().unwrap();

        let Some(user) = users
            .iter_mut()
            .find(|u| u.id_string().as_deref() == Some(id))
        else {
            return Ok(None);
        };

        user.mark_deleted();

        Ok(Some(user.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::user::UserRole;

    const TEST_COST: u32 = 4;

    fn draft(name: &str, email: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password: "password123".to_string(),
            role: UserRole::Student,
        }
    }

    #[actix_web::test]
    async fn test_create_assigns_id_and_hashes_password() {
        let repo = InMemoryUserRepository::with_cost(TEST_COST);

        let user = repo
            .create(draft("John Doe", "john@example.com"))
            .await
            .unwrap();

        assert!(user.id.is_some());
        assert!(!user.is_deleted);
        assert_ne!(user.password_hash, "password123");
        assert!(bcrypt::verify("password123", &user.password_hash).unwrap());
    }

    #[actix_web::test]
    async fn test_soft_delete_flips_flag_and_is_idempotent() {
        let repo = InMemoryUserRepository::with_cost(TEST_COST);
        let user = repo
            .create(draft("John Doe", "john@example.com"))
            .await
            .unwrap();
        let id = user.id_string().unwrap();

        let deleted = repo.soft_delete(&id).await.unwrap().unwrap();
        assert!(deleted.is_deleted);

        // 두 번째 삭제도 같은 결과를 돌려주고 레코드는 남아 있어야 한다
        let deleted_again = repo.soft_delete(&id).await.unwrap().unwrap();
        assert!(deleted_again.is_deleted);

        let fetched = repo.find_by_id(&id).await.unwrap().unwrap();
        assert!(fetched.is_deleted);
        assert_eq!(fetched.email, "john@example.com");
    }

    #[actix_web::test]
    async fn test_search_paginates_and_counts() {
        let repo = InMemoryUserRepository::with_cost(TEST_COST);
        for i in 0..25 {
            repo.create(draft(&format!("User {}", i), &format!("user{}@example.com", i)))
                .await
                .unwrap();
        }

        let page1 = repo
            .search(&UserSearchQuery {
                limit: 10,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page1.total_count, 25);
        assert_eq!(page1.total_pages, 3);
        assert_eq!(page1.data.len(), 10);

        let page3 = repo
            .search(&UserSearchQuery {
                page: 3,
                limit: 10,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page3.data.len(), 5);

        // 범위를 벗어난 페이지: 빈 목록이지만 건수 정보는 동일
        let page4 = repo
            .search(&UserSearchQuery {
                page: 4,
                limit: 10,
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(page4.total_count, 25);
        assert_eq!(page4.total_pages, 3);
        assert!(page4.data.is_empty());
    }

    #[actix_web::test]
    async fn test_search_filters_by_deleted_flag() {
        let repo = InMemoryUserRepository::with_cost(TEST_COST);
        let a = repo.create(draft("A", "a@example.com")).await.unwrap();
        repo.create(draft("B", "b@example.com")).await.unwrap();
        repo.create(draft("C", "c@example.com")).await.unwrap();
        repo.soft_delete(&a.id_string().unwrap()).await.unwrap();

        let active = repo
            .search(&UserSearchQuery {
                is_deleted: Some(false),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(active.total_count, 2);

        let deleted = repo
            .search(&UserSearchQuery {
                is_deleted: Some(true),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(deleted.total_count, 1);
        assert_eq!(deleted.data[0].email, "a@example.com");

        // 조건을 지정하지 않으면 삭제된 사용자도 포함
        let all = repo.search(&UserSearchQuery::default()).await.unwrap();
        assert_eq!(all.total_count, 3);
    }

    #[actix_web::test]
    async fn test_search_matches_name_case_insensitive() {
        let repo = InMemoryUserRepository::with_cost(TEST_COST);
        repo.create(draft("John Doe", "john@example.com"))
            .await
            .unwrap();
        repo.create(draft("Jane Smith", "jane@example.com"))
            .await
            .unwrap();

        let result = repo
            .search(&UserSearchQuery {
                name: Some("JOHN".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(result.total_count, 1);
        assert_eq!(result.data[0].name, "John Doe");
    }

    #[actix_web::test]
    async fn test_update_changes_only_requested_fields() {
        let repo = InMemoryUserRepository::with_cost(TEST_COST);
        let user = repo
            .create(draft("John Doe", "john@example.com"))
            .await
            .unwrap();
        let id = user.id_string().unwrap();

        let updated = repo
            .update(
                &id,
                UserChanges {
                    name: Some("John Updated".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "John Updated");
        assert_eq!(updated.email, "john@example.com");
        assert_eq!(updated.role, UserRole::Student);
        assert_eq!(updated.password_hash, user.password_hash);
    }

    #[actix_web::test]
    async fn test_update_unknown_or_malformed_id_returns_none() {
        let repo = InMemoryUserRepository::with_cost(TEST_COST);

        let missing = repo
            .update(
                &ObjectId::new().to_hex(),
                UserChanges {
                    name: Some("Nobody".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(missing.is_none());

        let malformed = repo.update("not-an-object-id", UserChanges::default()).await;
        assert!(malformed.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_email_exists_reflects_store() {
        let repo = InMemoryUserRepository::with_cost(TEST_COST);

        assert!(!repo.email_exists("john@example.com").await.unwrap());

        repo.create(draft("John Doe", "john@example.com"))
            .await
            .unwrap();

        assert!(repo.email_exists("john@example.com").await.unwrap());
        let found = repo.find_by_email("john@example.com").await.unwrap();
        assert!(found.is_some());
    }
}
