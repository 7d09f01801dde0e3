//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! `users` 컬렉션의 문서와 1:1로 매핑되며, 소프트 삭제 모델을 사용합니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 사용자 역할
///
/// 시스템이 허용하는 역할의 닫힌 집합입니다.
/// 저장소와 API 모두 소문자 문자열("student", "instructor", "admin")로 직렬화됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// 수강생 (기본 역할)
    #[default]
    Student,
    /// 강사
    Instructor,
    /// 관리자
    Admin,
}

impl UserRole {
    /// 역할을 저장소/API 문자열 표현으로 변환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Student => "student",
            UserRole::Instructor => "instructor",
            UserRole::Admin => "admin",
        }
    }

    /// 문자열에서 역할을 파싱합니다.
    ///
    /// # Returns
    ///
    /// 허용된 역할이면 `Some`, 그 외의 값이면 `None`
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "student" => Some(UserRole::Student),
            "instructor" => Some(UserRole::Instructor),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// 삭제는 물리 삭제가 아닌 `is_deleted` 플래그 전환으로 표현됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름
    pub name: String,
    /// 사용자 이메일 (중복 검사는 애플리케이션 계층에서만 수행)
    pub email: String,
    /// 해시된 비밀번호 (평문은 저장하지 않음)
    pub password_hash: String,
    /// 사용자 역할
    pub role: UserRole,
    /// 소프트 삭제 플래그 (플래그 없는 기존 문서는 false로 간주)
    #[serde(default)]
    pub is_deleted: bool,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 활성 상태(`is_deleted = false`)의 사용자를 생성합니다.
    /// ID는 저장소가 삽입 시 할당하므로 `None`으로 시작합니다.
    ///
    /// # 인자
    ///
    /// * `name` - 사용자 이름
    /// * `email` - 사용자 이메일
    /// * `password_hash` - 이미 해시된 비밀번호
    /// * `role` - 사용자 역할
    pub fn new(name: String, email: String, password_hash: String, role: UserRole) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            email,
            password_hash,
            role,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 소프트 삭제 처리
    ///
    /// 레코드는 저장소에 그대로 남고 플래그와 수정 시간만 갱신됩니다.
    pub fn mark_deleted(&mut self) {
        self.is_deleted = true;
        self.updated_at = DateTime::now();
    }
}

/// 검색 결과용 축소 사용자 뷰
///
/// 검색 응답은 전체 문서가 아닌 축소된 필드 집합만 노출합니다.
/// 비밀번호 해시는 쿼리 프로젝션 단계에서 제외됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub is_deleted: bool,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            is_deleted: user.is_deleted,
        }
    }
}
