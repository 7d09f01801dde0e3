//! 사용자 생성 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::users::user::UserRole;

/// 새로운 사용자 계정 생성을 위한 요청 DTO
///
/// JSON 역직렬화와 입력 검증을 자동으로 수행합니다.
/// 역할은 닫힌 열거형(`student`/`instructor`/`admin`) 안에서만 허용됩니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 사용자 이름 (1-50자)
    #[validate(length(
        min = 1,
        max = 50,
        message = "이름은 1-50자 사이여야 합니다"
    ))]
    pub name: String,

    /// 사용자 이메일 주소 (RFC 5322 표준)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호 (최소 6자)
    #[validate(length(
        min = 6,
        message = "비밀번호는 최소 6자 이상이어야 합니다"
    ))]
    pub password: String,

    /// 사용자 역할 (student / instructor / admin)
    #[validate(custom(function = "validate_role"))]
    pub role: String,
}

/// 역할 값이 닫힌 열거형에 속하는지 검증
pub(crate) fn validate_role(role: &str) -> Result<(), ValidationError> {
    if UserRole::parse(role).is_none() {
        return Err(ValidationError::new("invalid_role")
            .with_message("역할은 student, instructor, admin 중 하나여야 합니다".into()));
    }
    Ok(())
}
