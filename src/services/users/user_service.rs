//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 전체 생명주기를 관리하는 핵심 비즈니스 로직을 구현합니다.
//! Spring Framework의 UserService 패턴을 참고하여 설계되었으며,
//! 목록/단건/검색 조회, 생성, 부분 수정, 소프트 삭제 기능을 제공합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         UserService                             │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐  │
//! │  │    Creation     │  │   User Query    │  │  Modification   │  │
//! │  │                 │  │                 │  │                 │  │
//! │  │ • Duplicate Chk │  │ • List All      │  │ • Partial Update│  │
//! │  │ • Password Req  │  │ • By ID         │  │ • Role Change   │  │
//! │  │ • Role Parse    │  │ • Search/Paging │  │ • Soft Delete   │  │
//! │  │ • Entity Create │  │ • Entity to DTO │  │ • Not-Found Map │  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//!                                 │
//!                                 ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   dyn UserRepository                            │
//! │ • MongoDB CRUD Operations                                       │
//! │ • Regex Search + Pagination                                     │
//! │ • Password Hashing (create/update)                              │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 비즈니스 규칙
//!
//! 생성 경로에만 두 가지 규칙이 적용됩니다:
//!
//! 1. **이메일 중복 금지**: `email_exists` 사전 확인 후 충돌이면 거부
//! 2. **비밀번호 존재**: 빈 비밀번호는 저장소에 도달하기 전에 거부
//!
//! 조회/수정/삭제 경로는 리포지토리 위의 얇은 오케스트레이션이며,
//! "없음"을 NotFound 에러로 승격하는 것이 유일한 추가 책임입니다.

use std::sync::Arc;

use crate::domain::dto::users::request::{
    CreateUserRequest, SearchUsersRequest, UpdateUserRequest,
};
use crate::domain::dto::users::response::{SearchUsersResponse, UserResponse};
use crate::domain::entities::users::user::UserRole;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::{NewUser, UserChanges, UserRepository};
use crate::utils::string_utils::validate_required_string;

/// 사용자 관리 비즈니스 로직 서비스
///
/// Spring Framework의 `@Service` UserService와 유사한 역할을 수행합니다.
/// 리포지토리 트레이트에만 의존하므로 MongoDB 구현과 인메모리 구현을
/// 동일하게 받을 수 있습니다.
///
/// ## 에러 처리 전략
///
/// 모든 메서드는 `Result<T, AppError>`를 반환하며,
/// 다음과 같은 일관된 에러 처리를 제공합니다:
///
/// - **ValidationError**: 입력값 검증 실패 (빈 비밀번호, 알 수 없는 역할)
/// - **ConflictError**: 비즈니스 규칙 위반 (이메일 중복)
/// - **NotFound**: 리소스 존재하지 않음
/// - **DatabaseError / InternalError**: 저장소 및 시스템 레벨 오류
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use crate::repositories::users::MongoUserRepository;
/// use crate::services::users::UserService;
///
/// let repo = Arc::new(MongoUserRepository::new(&database));
/// let user_service = UserService::new(repo);
///
/// let request = CreateUserRequest {
///     name: "John Doe".to_string(),
///     email: "john@example.com".to_string(),
///     password: "secret123".to_string(),
///     role: "student".to_string(),
/// };
///
/// let response = user_service.create_user(request).await?;
/// println!("사용자 생성: {}", response.id);
/// ```
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리
    ///
    /// 트레이트 객체로 주입되며, 테스트에서는 인메모리 구현으로 교체됩니다.
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    /// 주입된 리포지토리로 서비스를 생성합니다.
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 전체 사용자 목록 조회
    ///
    /// 페이지네이션 없이 모든 사용자를 반환합니다 (삭제된 사용자 포함).
    /// 대량 조회가 필요한 경우에는 [`Self::search_users`]를 사용해야 합니다.
    pub async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.user_repo.find_all().await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// ID로 사용자 조회
    ///
    /// # 인자
    ///
    /// * `id` - 조회할 사용자의 MongoDB ObjectId (16진수 문자열)
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 사용자 정보 DTO (민감 정보 제외)
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 존재하지 않거나 ID 형식이 잘못됨
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 조회 오류
    ///
    /// 소프트 삭제된 사용자도 `is_deleted=true` 상태로 그대로 반환됩니다.
    pub async fn get_user_by_id(&self, id: &str) -> AppResult<UserResponse> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 조건 검색 + 페이지네이션
    ///
    /// 검증된 쿼리 DTO를 리포지토리 검색 조건으로 변환해 실행합니다.
    /// 조건이 비어 있으면 삭제된 사용자를 포함한 전체가 대상입니다.
    ///
    /// # 인자
    ///
    /// * `request` - 핸들러에서 검증을 마친 검색 쿼리 DTO
    ///
    /// # 반환값
    ///
    /// 전체 건수, 전체 페이지 수와 요청 페이지의 축소 필드 목록.
    pub async fn search_users(&self, request: &SearchUsersRequest) -> AppResult<SearchUsersResponse> {
        let query = request.to_query();

        let page = self.user_repo.search(&query).await?;

        Ok(SearchUsersResponse::from(page))
    }

    /// 새 사용자 계정 생성
    ///
    /// # 인자
    ///
    /// * `request` - 사용자 생성 요청 데이터 (이름, 이메일, 평문 비밀번호, 역할)
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 생성된 사용자 정보 (비밀번호 해시 제외)
    /// * `Err(AppError::ConflictError)` - 이메일 중복
    /// * `Err(AppError::ValidationError)` - 빈 비밀번호 또는 알 수 없는 역할
    /// * `Err(AppError::InternalError)` - 비밀번호 해싱 실패
    ///
    /// # 처리 과정
    ///
    /// 1. **중복 확인**: `email_exists`로 이메일 사용 여부 사전 확인
    /// 2. **비밀번호 확인**: 빈 비밀번호는 저장소 쓰기 전에 거부
    /// 3. **역할 변환**: 문자열 역할을 닫힌 열거형으로 변환
    /// 4. **영구 저장**: 리포지토리가 해싱 후 저장
    /// 5. **성능 로깅**: 전체 처리 시간 기록
    ///
    /// # 비즈니스 규칙
    ///
    /// - **이메일 유니크성**: 저장소 제약이 아닌 이 사전 확인으로만 보장됩니다.
    ///   확인과 저장 사이의 경쟁 윈도우는 닫히지 않습니다.
    /// - **비밀번호 존재**: DTO 검증과 별개로 이 계층에서도 확인합니다.
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        let start_time = std::time::Instant::now();

        if self.user_repo.email_exists(&request.email).await? {
            return Err(AppError::ConflictError(
                "이미 사용 중인 이메일입니다".to_string(),
            ));
        }

        validate_required_string(&request.password, "비밀번호")?;

        let role = Self::parse_role(&request.role)?;

        let draft = NewUser {
            name: request.name,
            email: request.email,
            password: request.password,
            role,
        };

        let created = self.user_repo.create(draft).await?;

        log::info!("Total user creation took: {:?}", start_time.elapsed());

        Ok(UserResponse::from(created))
    }

    /// 사용자 부분 수정
    ///
    /// 제공된 필드만 변경합니다. 비밀번호가 포함되면 저장 시점에 새로
    /// 해싱되고, `updated_at`은 항상 갱신됩니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 수정 후 상태
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 존재하지 않음
    pub async fn update_user(&self, id: &str, request: UpdateUserRequest) -> AppResult<UserResponse> {
        let role = match request.role.as_deref() {
            Some(value) => Some(Self::parse_role(value)?),
            None => None,
        };

        let changes = UserChanges {
            name: request.name,
            email: request.email,
            password: request.password,
            role,
        };

        let updated = self
            .user_repo
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(UserResponse::from(updated))
    }

    /// 사용자 소프트 삭제
    ///
    /// 레코드를 제거하지 않고 `is_deleted` 플래그만 전환한 뒤,
    /// 삭제 처리된 상태의 레코드를 돌려줍니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - `is_deleted=true`로 표시된 사용자 정보
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 존재하지 않음
    pub async fn delete_user(&self, id: &str) -> AppResult<UserResponse> {
        let deleted = self
            .user_repo
            .soft_delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        log::info!("사용자 소프트 삭제 처리: {}", id);

        Ok(UserResponse::from(deleted))
    }

    /// 문자열 역할을 닫힌 열거형으로 변환
    fn parse_role(value: &str) -> AppResult<UserRole> {
        UserRole::parse(value).ok_or_else(|| {
            AppError::ValidationError(
                "역할은 student, instructor, admin 중 하나여야 합니다".to_string(),
            )
        })
    }
}
