//! 사용자 수정 요청 DTO
//!
//! 부분 수정(PATCH)을 위한 요청 구조입니다. 모든 필드가 선택이며,
//! 제공된 필드에만 생성 요청과 동일한 검증 규칙이 적용됩니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::create_user_request::validate_role;

/// 사용자 부분 수정 요청 DTO
///
/// 생략된 필드는 변경하지 않습니다. 비밀번호가 포함되면
/// 저장 시점에 새로 해싱됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// 사용자 이름 (1-50자)
    #[validate(length(
        min = 1,
        max = 50,
        message = "이름은 1-50자 사이여야 합니다"
    ))]
    pub name: Option<String>,

    /// 사용자 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    /// 계정 비밀번호 (최소 6자)
    #[validate(length(
        min = 6,
        message = "비밀번호는 최소 6자 이상이어야 합니다"
    ))]
    pub password: Option<String>,

    /// 사용자 역할 (student / instructor / admin)
    #[validate(custom(function = "validate_role"))]
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_passes_validation() {
        let request = UpdateUserRequest::default();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_partial_fields_validated_when_present() {
        let request = UpdateUserRequest {
            password: Some("short".to_string()),
            ..Default::default()
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_valid_partial_update_passes() {
        let request = UpdateUserRequest {
            name: Some("Jane Smith".to_string()),
            role: Some("instructor".to_string()),
            ..Default::default()
        };

        assert!(request.validate().is_ok());
    }
}
