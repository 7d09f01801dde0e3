//! # 사용자 리포지토리 MongoDB 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! `users` 컬렉션에 대한 CRUD, 조건 검색, 소프트 삭제를 제공합니다.
//!
//! ## 특징
//!
//! - **명시적 생성**: `main`에서 [`Database`] 핸들을 받아 생성되고 서비스에 주입됨
//! - **소프트 삭제**: 삭제는 `is_deleted` 플래그 전환으로만 수행
//! - **단일 해싱 지점**: 비밀번호 해싱은 `create`/`update` 내부에서만 수행
//! - **일관된 에러 변환**: 모든 저장소 에러는 [`StoreErrorExt`]를 통해
//!   고정 메시지의 `DatabaseError`로 변환되고 원인은 로그로만 남김
//!
//! ## 에러 처리
//!
//! 모든 메서드는 `AppResult<T>`를 반환합니다. "찾을 수 없음"은 값으로
//! (`Ok(None)` / `Ok(false)`) 표현하며, 에러는 저장소 장애에만 사용합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::repositories::users::{UserRepository, user_repo::MongoUserRepository};
//!
//! let repo = MongoUserRepository::new(&database);
//! repo.create_indexes().await?;
//!
//! let draft = NewUser {
//!     name: "John Doe".to_string(),
//!     email: "john@example.com".to_string(),
//!     password: "secret123".to_string(),
//!     role: UserRole::Student,
//! };
//!
//! let created = repo.create(draft).await?;
//! let found = repo.find_by_email("john@example.com").await?;
//! ```

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Collection, IndexModel,
    bson::{DateTime, Document, doc, oid::ObjectId},
    options::{FindOneAndUpdateOptions, FindOptions, IndexOptions, ReturnDocument},
};

use crate::config::PasswordConfig;
use crate::db::Database;
use crate::domain::entities::users::user::{User, UserSummary};
use crate::errors::{AppError, AppResult, StoreErrorExt};
use crate::repositories::users::{
    NewUser, UserChanges, UserPage, UserRepository, UserSearchQuery,
};

/// 사용자 데이터 액세스 리포지토리 (MongoDB)
///
/// `users` 컬렉션에 대한 모든 저장소 연산을 담당합니다.
/// 이메일 유니크 인덱스는 의도적으로 만들지 않습니다.
/// 이메일 중복 방지는 애플리케이션 계층의 사전 확인으로만 수행됩니다.
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    /// 새 리포지토리를 생성합니다.
    ///
    /// # 인자
    ///
    /// * `db` - `main`에서 생성된 데이터베이스 연결 핸들
    pub fn new(db: &Database) -> Self {
        let collection = db.get_database().collection::<User>("users");
        Self { collection }
    }

    /// 검색 조건을 MongoDB 필터 문서로 변환합니다.
    ///
    /// `name`/`email`은 대소문자 무시 정규식 부분 일치,
    /// `role`/`is_deleted`는 정확 일치로 매핑됩니다.
    /// 지정하지 않은 조건은 필터에 포함되지 않으므로,
    /// 빈 조건은 삭제된 사용자를 포함한 전체 컬렉션과 일치합니다.
    fn build_search_filter(query: &UserSearchQuery) -> Document {
        let mut filter = doc! {};

        if let Some(ref name) = query.name {
            filter.insert("name", doc! { "$regex": name, "$options": "i" });
        }

        if let Some(ref email) = query.email {
            filter.insert("email", doc! { "$regex": email, "$options": "i" });
        }

        if let Some(role) = query.role {
            filter.insert("role", role.as_str());
        }

        if let Some(is_deleted) = query.is_deleted {
            filter.insert("is_deleted", is_deleted);
        }

        filter
    }

    /// 검색 조건을 MongoDB 정렬 문서로 변환합니다.
    fn build_sort(query: &UserSearchQuery) -> Document {
        let mut sort = Document::new();
        sort.insert(query.sort_field(), query.order.as_i32());
        sort
    }

    /// 부분 수정 입력을 `$set` 문서로 변환합니다.
    ///
    /// 비밀번호가 포함된 경우 여기서 새로 해싱하며,
    /// `updated_at`은 항상 현재 시각으로 갱신합니다.
    fn build_update_doc(changes: UserChanges) -> AppResult<Document> {
        let mut set_doc = doc! {};

        if let Some(name) = changes.name {
            set_doc.insert("name", name);
        }

        if let Some(email) = changes.email {
            set_doc.insert("email", email);
        }

        if let Some(password) = changes.password {
            let password_hash = bcrypt::hash(&password, PasswordConfig::bcrypt_cost())
                .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
            set_doc.insert("password_hash", password_hash);
        }

        if let Some(role) = changes.role {
            set_doc.insert("role", role.as_str());
        }

        set_doc.insert("updated_at", DateTime::now());

        Ok(set_doc)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 조회 및 정렬 성능을 위한 인덱스를 생성합니다.
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **이메일 조회 인덱스** - `email` 오름차순, 유니크 아님
    ///    (이메일 중복 방지는 애플리케이션 계층 책임)
    /// 2. **생성일 인덱스** - `created_at` 내림차순, 기본 정렬용
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .name("email_lookup".to_string())
                    .build(),
            )
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_indexes([email_index, created_at_index])
            .await
            .store_context("인덱스 생성에 실패했습니다")?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    /// 전체 사용자 목록 조회
    ///
    /// 소프트 삭제된 사용자를 포함한 모든 문서를 반환합니다.
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .store_context("사용자 목록 조회에 실패했습니다")?;

        cursor
            .try_collect()
            .await
            .store_context("사용자 목록 조회에 실패했습니다")
    }

    /// ID로 사용자 조회
    ///
    /// # 인자
    ///
    /// * `id` - MongoDB ObjectId의 16진수 문자열 표현
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우 (삭제된 사용자도 반환됨)
    /// * `Ok(None)` - 해당 ID의 사용자가 없거나 ID 형식이 잘못된 경우
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        // 형식이 잘못된 ID는 존재하지 않는 ID와 같게 취급한다
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .store_context("사용자 조회에 실패했습니다")
    }

    /// 이메일 주소로 사용자 조회
    ///
    /// 로그인 검증을 위해 비밀번호 해시를 포함한 전체 레코드를 반환합니다.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.collection
            .find_one(doc! { "email": email })
            .await
            .store_context("이메일 조회에 실패했습니다")
    }

    /// 이메일 사용 여부 확인
    ///
    /// 레코드 전체를 역직렬화하지 않고 개수만 확인합니다.
    async fn email_exists(&self, email: &str) -> AppResult<bool> {
        let count = self
            .collection
            .count_documents(doc! { "email": email })
            .await
            .store_context("이메일 중복 확인에 실패했습니다")?;

        Ok(count > 0)
    }

    /// 조건 검색 + 페이지네이션
    ///
    /// # 처리 과정
    ///
    /// 1. 필터와 일치하는 전체 건수 계산
    /// 2. 정렬/스킵/리밋을 적용해 요청 페이지 조회
    /// 3. 프로젝션으로 축소 필드 집합만 역직렬화 (비밀번호 해시 제외)
    ///
    /// # 반환값
    ///
    /// 전체 건수, 전체 페이지 수(ceil), 요청 페이지의 [`UserSummary`] 목록.
    /// 범위를 벗어난 페이지는 빈 목록과 동일한 건수 정보를 반환합니다.
    async fn search(&self, query: &UserSearchQuery) -> AppResult<UserPage> {
        let filter = Self::build_search_filter(query);

        let total_count = self
            .collection
            .count_documents(filter.clone())
            .await
            .store_context("사용자 검색에 실패했습니다")?;

        let limit = query.limit.max(1);
        let page = query.page.max(1);

        let options = FindOptions::builder()
            .limit(limit)
            .skip(query.skip())
            .sort(Self::build_sort(query))
            .projection(doc! { "name": 1, "email": 1, "role": 1, "is_deleted": 1 })
            .build();

        let cursor = self
            .collection
            .clone_with_type::<UserSummary>()
            .find(filter)
            .with_options(options)
            .await
            .store_context("사용자 검색에 실패했습니다")?;

        let data: Vec<UserSummary> = cursor
            .try_collect()
            .await
            .store_context("사용자 검색에 실패했습니다")?;

        Ok(UserPage {
            total_count,
            total_pages: UserPage::page_count(total_count, limit),
            page,
            limit,
            data,
        })
    }

    /// 새 사용자 생성
    ///
    /// # 인자
    ///
    /// * `draft` - 평문 비밀번호를 포함한 생성 입력
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 해시된 비밀번호와 할당된 ID를 포함한 생성 결과
    /// * `Err(AppError::InternalError)` - 비밀번호 해싱 실패
    /// * `Err(AppError::DatabaseError)` - 저장 실패
    ///
    /// 이메일 중복 검사는 이 계층에서 수행하지 않습니다.
    async fn create(&self, draft: NewUser) -> AppResult<User> {
        let password_hash = bcrypt::hash(&draft.password, PasswordConfig::bcrypt_cost())
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;

        let mut user = User::new(draft.name, draft.email, password_hash, draft.role);

        let result = self
            .collection
            .insert_one(&user)
            .await
            .store_context("사용자 생성에 실패했습니다")?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }

    /// 사용자 부분 수정
    ///
    /// MongoDB `$set` 연산자로 지정된 필드만 변경하고,
    /// `ReturnDocument::After`로 수정 후 상태를 돌려받습니다.
    async fn update(&self, id: &str, changes: UserChanges) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let set_doc = Self::build_update_doc(changes)?;

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": set_doc })
            .with_options(options)
            .await
            .store_context("사용자 수정에 실패했습니다")
    }

    /// 사용자 소프트 삭제
    ///
    /// 문서를 제거하지 않고 `is_deleted` 플래그만 전환합니다.
    /// 이미 삭제된 사용자에 대해서도 같은 결과를 반환합니다 (멱등).
    async fn soft_delete(&self, id: &str) -> AppResult<Option<User>> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": { "is_deleted": true, "updated_at": DateTime::now() } },
            )
            .with_options(options)
            .await
            .store_context("사용자 삭제에 실패했습니다")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::users::user::UserRole;
    use crate::repositories::users::SortOrder;

    #[test]
    fn test_build_filter_empty() {
        let query = UserSearchQuery::default();
        let filter = MongoUserRepository::build_search_filter(&query);

        assert!(filter.is_empty());
    }

    #[test]
    fn test_build_filter_with_name_regex() {
        let query = UserSearchQuery {
            name: Some("john".to_string()),
            ..Default::default()
        };
        let filter = MongoUserRepository::build_search_filter(&query);

        let name_filter = filter.get_document("name").expect("name filter");
        assert_eq!(name_filter.get_str("$regex").expect("regex"), "john");
        assert_eq!(name_filter.get_str("$options").expect("options"), "i");
    }

    #[test]
    fn test_build_filter_with_role_and_deleted() {
        let query = UserSearchQuery {
            role: Some(UserRole::Instructor),
            is_deleted: Some(true),
            ..Default::default()
        };
        let filter = MongoUserRepository::build_search_filter(&query);

        assert_eq!(filter.get_str("role").expect("role"), "instructor");
        assert!(filter.get_bool("is_deleted").expect("is_deleted"));
        assert!(!filter.contains_key("name"));
        assert!(!filter.contains_key("email"));
    }

    #[test]
    fn test_build_sort_defaults_to_created_at_desc() {
        let query = UserSearchQuery::default();
        let sort = MongoUserRepository::build_sort(&query);

        assert_eq!(sort.get_i32("created_at").expect("created_at"), -1);
    }

    #[test]
    fn test_build_sort_normalizes_api_field_names() {
        let query = UserSearchQuery {
            sort_by: "updatedAt".to_string(),
            order: SortOrder::Asc,
            ..Default::default()
        };
        let sort = MongoUserRepository::build_sort(&query);

        assert_eq!(sort.get_i32("updated_at").expect("updated_at"), 1);
    }

    #[test]
    fn test_build_update_doc_always_bumps_updated_at() {
        let changes = UserChanges {
            name: Some("New Name".to_string()),
            ..Default::default()
        };
        let set_doc = MongoUserRepository::build_update_doc(changes).expect("update doc");

        assert_eq!(set_doc.get_str("name").expect("name"), "New Name");
        assert!(set_doc.contains_key("updated_at"));
        assert!(!set_doc.contains_key("password_hash"));
        assert!(!set_doc.contains_key("email"));
    }

    #[test]
    fn test_build_update_doc_hashes_password() {
        let changes = UserChanges {
            password: Some("newsecret".to_string()),
            ..Default::default()
        };
        let set_doc = MongoUserRepository::build_update_doc(changes).expect("update doc");

        let stored = set_doc.get_str("password_hash").expect("password_hash");
        assert_ne!(stored, "newsecret");
        assert!(bcrypt::verify("newsecret", stored).expect("verify"));
    }
}
