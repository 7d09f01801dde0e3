//! 인증 요청관련 DTO
//!
//! 인증을 요청하는 사용자들의 요청 정보를 매핑합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::create_user_request::validate_role;

/// 회원가입 요청 구조체
///
/// 역할은 선택 입력이며, 생략하면 `student`로 생성됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// 사용자 이름 (1-50자)
    #[validate(length(
        min = 1,
        max = 50,
        message = "이름은 1-50자 사이여야 합니다"
    ))]
    pub name: String,

    /// 사용자 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호 (최소 6자)
    #[validate(length(
        min = 6,
        message = "비밀번호는 최소 6자 이상이어야 합니다"
    ))]
    pub password: String,

    /// 사용자 역할 (student / instructor / admin, 생략 가능)
    #[validate(custom(function = "validate_role"))]
    pub role: Option<String>,
}

/// 로그인 요청 구조체
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// 사용자 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호
    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_without_role_passes() {
        let request = RegisterRequest {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            password: "secret123".to_string(),
            role: None,
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_with_unknown_role_rejected() {
        let request = RegisterRequest {
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            password: "secret123".to_string(),
            role: Some("wizard".to_string()),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("role"));
    }

    #[test]
    fn test_login_requires_password() {
        let request = LoginRequest {
            email: "john@example.com".to_string(),
            password: String::new(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }
}
