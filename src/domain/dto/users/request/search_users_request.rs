//! 사용자 검색 요청 DTO
//!
//! `GET /api/users/search`의 쿼리 스트링을 받는 구조입니다.
//! 쿼리 스트링 특성상 `page`/`limit`은 숫자 형식의 문자열로 도착하며,
//! 검증 후 [`UserSearchQuery`]로 변환되면서 정수로 강제됩니다.
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::create_user_request::validate_role;
use crate::domain::entities::users::user::UserRole;
use crate::repositories::users::{SortOrder, UserSearchQuery};
use crate::utils::string_utils::deserialize_optional_string;

/// 사용자 검색 쿼리 DTO
///
/// 모든 조건이 선택이며, 조건을 하나도 지정하지 않으면
/// 삭제된 사용자를 포함한 전체 목록이 대상이 됩니다.
///
/// | 파라미터 | 의미 | 기본값 |
/// |----------|------|--------|
/// | `name` | 이름 부분 일치 (대소문자 무시) | - |
/// | `email` | 이메일 부분 일치 (대소문자 무시) | - |
/// | `role` | 역할 정확 일치 | - |
/// | `isDeleted` | 삭제 플래그 정확 일치 | - |
/// | `page` | 1부터 시작하는 페이지 번호 | 1 |
/// | `limit` | 페이지 크기 | 10 |
/// | `sortBy` | 정렬 필드 | createdAt |
/// | `order` | asc / desc | desc |
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SearchUsersRequest {
    /// 이름 필터. `?name=`처럼 빈 값으로 오면 필터 없음으로 취급합니다.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,

    /// 이메일 필터. 빈 값은 필터 없음으로 취급합니다.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,

    /// 사용자 역할 (student / instructor / admin)
    #[validate(custom(function = "validate_role"))]
    pub role: Option<String>,

    pub is_deleted: Option<bool>,

    /// 페이지 번호 (숫자 형식 문자열)
    #[validate(custom(function = "validate_numeric_string"))]
    pub page: Option<String>,

    /// 페이지 크기 (숫자 형식 문자열)
    #[validate(custom(function = "validate_numeric_string"))]
    pub limit: Option<String>,

    pub sort_by: Option<String>,

    /// 정렬 방향 (asc / desc)
    #[validate(custom(function = "validate_order"))]
    pub order: Option<String>,
}

impl SearchUsersRequest {
    /// 검증된 요청을 리포지토리 검색 조건으로 변환합니다.
    ///
    /// 페이지 번호와 크기는 정수로 강제되며, 변환할 수 없는 값은
    /// 기본값(1 / 10)으로 대체됩니다. 정렬 방향은 `asc`만 오름차순으로
    /// 인식하고 나머지는 내림차순입니다.
    pub fn to_query(&self) -> UserSearchQuery {
        UserSearchQuery {
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role.as_deref().and_then(UserRole::parse),
            is_deleted: self.is_deleted,
            page: self
                .page
                .as_deref()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1),
            limit: self
                .limit
                .as_deref()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
            sort_by: self
                .sort_by
                .clone()
                .unwrap_or_else(|| "created_at".to_string()),
            order: match self.order.as_deref() {
                Some("asc") => SortOrder::Asc,
                _ => SortOrder::Desc,
            },
        }
    }
}

/// 숫자 형식 문자열 검증 (양의 십진수만 허용)
fn validate_numeric_string(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("not_a_number")
            .with_message("숫자 형식의 문자열이어야 합니다".into()));
    }
    Ok(())
}

/// 정렬 방향 검증
fn validate_order(order: &str) -> Result<(), ValidationError> {
    if order != "asc" && order != "desc" {
        return Err(ValidationError::new("invalid_order")
            .with_message("정렬 방향은 asc 또는 desc여야 합니다".into()));
    }
    Ok(())
}
