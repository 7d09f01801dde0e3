use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::{User, UserRole, UserSummary};
use crate::repositories::users::UserPage;

/// 사용자 응답 DTO
///
/// 저장 문서의 snake_case 필드를 API 표면의 camelCase로 바꾸고,
/// 타임스탬프는 RFC 3339 문자열로 내보냅니다.
/// 비밀번호 해시는 변환 단계에서 제거되어 어떤 응답에도 포함되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub is_deleted: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            role,
            is_deleted,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            role,
            is_deleted,
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
            updated_at: updated_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

/// 검색 결과 항목 DTO (축소 필드 집합)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub is_deleted: bool,
}

impl From<UserSummary> for UserSummaryResponse {
    fn from(summary: UserSummary) -> Self {
        Self {
            id: summary.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: summary.name,
            email: summary.email,
            role: summary.role,
            is_deleted: summary.is_deleted,
        }
    }
}

/// 검색 응답 DTO
///
/// 전체 건수와 페이지 정보를 요청 페이지의 데이터와 함께 돌려줍니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchUsersResponse {
    pub total_count: u64,
    pub total_pages: u64,
    pub page: i64,
    pub limit: i64,
    pub data: Vec<UserSummaryResponse>,
}

impl From<UserPage> for SearchUsersResponse {
    fn from(page: UserPage) -> Self {
        Self {
            total_count: page.total_count,
            total_pages: page.total_pages,
            page: page.page,
            limit: page.limit,
            data: page
                .data
                .into_iter()
                .map(UserSummaryResponse::from)
                .collect(),
        }
    }
}

/// 로그인 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "John Doe".to_string(),
            "john@example.com".to_string(),
            "$2b$04$hash".to_string(),
            UserRole::Student,
        )
    }

    #[test]
    fn test_response_uses_camel_case_and_drops_hash() {
        let response = UserResponse::from(sample_user());
        let json = serde_json::to_value(&response).unwrap();

        assert!(json.get("isDeleted").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["role"], "student");
    }

    #[test]
    fn test_timestamps_are_rfc3339() {
        let response = UserResponse::from(sample_user());

        // RFC 3339: "2026-01-02T03:04:05.678Z" 형태
        assert!(response.created_at.contains('T'));
        assert!(response.created_at.ends_with('Z'));
    }

    #[test]
    fn test_search_response_echoes_paging_info() {
        let user = sample_user();
        let page = UserPage {
            total_count: 25,
            total_pages: 3,
            page: 2,
            limit: 10,
            data: vec![UserSummary::from(&user)],
        };

        let response = SearchUsersResponse::from(page);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["totalCount"], 25);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["page"], 2);
        assert_eq!(json["limit"], 10);
        assert_eq!(json["data"][0]["email"], "john@example.com");
        assert!(json["data"][0].get("password").is_none());
    }
}
