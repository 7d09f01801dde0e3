//! # 문자열 유틸리티
//!
//! 문자열 검증과 정리에 쓰이는 공통 함수들입니다.
//! 필수 입력 검증은 서비스 계층에서, 선택 입력 정리는 DTO 역직렬화 단계에서 사용됩니다.

use serde::Deserialize;

use crate::errors::{AppError, AppResult};

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// 사용자 생성 시 비밀번호처럼 "존재해야만 하는" 값의 최종 방어선으로 사용합니다.
///
/// # 인자
/// * `value` - 검증할 문자열
/// * `field_name` - 필드명 (에러 메시지용)
///
/// # 반환값
/// * `Ok(String)` - 정리된 유효한 문자열
/// * `Err(AppError)` - 빈 문자열이거나 공백만 있는 경우
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
///
/// // 성공 케이스
/// assert_eq!(validate_required_string("  secret123  ", "비밀번호").unwrap(), "secret123");
///
/// // 실패 케이스
/// assert!(validate_required_string("   ", "비밀번호").is_err());
/// assert!(validate_required_string("", "비밀번호").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
///
/// 검색 필터처럼 "비어 있으면 없는 것과 같은" 입력을 정규화할 때 사용합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  John  ".to_string())), Some("John".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// 역직렬화 시 빈 문자열이나 공백만 있는 문자열을 자동으로 None으로 변환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 후 Some으로 반환합니다.
/// `#[serde(default, deserialize_with = "deserialize_optional_string")]` 형태로 사용하며,
/// `default`를 함께 지정해야 필드 생략도 None으로 처리됩니다.
///
/// 검색 쿼리스트링에서 `?name=`처럼 값 없이 키만 넘어오는 경우를
/// "필터 없음"으로 취급하기 위해 사용합니다.
///
/// # 예제
/// ```rust,ignore
/// use serde::Deserialize;
/// use crate::utils::string_utils::deserialize_optional_string;
///
/// #[derive(Deserialize)]
/// struct Filter {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     name: Option<String>,
/// }
///
/// // {"name": "  John  "} → Some("John")
/// // {"name": ""}         → None
/// // {"name": null}       → None
/// // {}                   → None
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        // 성공 케이스
        assert_eq!(validate_required_string("secret123", "비밀번호").unwrap(), "secret123");
        assert_eq!(validate_required_string("  secret123  ", "비밀번호").unwrap(), "secret123");

        // 실패 케이스
        assert!(validate_required_string("", "비밀번호").is_err());
        assert!(validate_required_string("   ", "비밀번호").is_err());
        assert!(validate_required_string("\t\n", "비밀번호").is_err());
    }

    #[test]
    fn test_validate_required_string_error_message() {
        let err = validate_required_string("", "비밀번호").unwrap_err();
        assert_eq!(err.to_string(), "Validation error: 비밀번호은(는) 필수입니다");
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("John".to_string())), Some("John".to_string()));
        assert_eq!(clean_optional_string(Some("  John  ".to_string())), Some("John".to_string()));
        assert_eq!(clean_optional_string(Some("".to_string())), None);
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct Filter {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            name: Option<String>,
        }

        // 유효한 문자열은 공백을 제거하고 Some으로
        let filter: Filter = serde_json::from_str(r#"{"name": "  John Doe  "}"#).unwrap();
        assert_eq!(filter.name, Some("John Doe".to_string()));

        // 빈 문자열, 공백, null, 필드 생략은 모두 None으로
        let filter: Filter = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert_eq!(filter.name, None);

        let filter: Filter = serde_json::from_str(r#"{"name": "   "}"#).unwrap();
        assert_eq!(filter.name, None);

        let filter: Filter = serde_json::from_str(r#"{"name": null}"#).unwrap();
        assert_eq!(filter.name, None);

        let filter: Filter = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(filter.name, None);

        // 한글 이름도 동일하게 정리된다
        let filter: Filter = serde_json::from_str(r#"{"name": "  홍길동  "}"#).unwrap();
        assert_eq!(filter.name, Some("홍길동".to_string()));
    }
}
