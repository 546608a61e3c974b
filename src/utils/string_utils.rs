//! # 문자열 유틸리티
//!
//! 관리자 설정 입력값 정리와 비밀값 마스킹에 쓰이는 공통 함수들입니다.

use serde::Deserialize;
use crate::errors::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있으면 `ValidationError`, 아니면 앞뒤 공백을 제거한 값을 반환합니다.
///
/// ```rust,ignore
/// assert_eq!(validate_required_string("  https://sso.example.com ", "server_url")?, "https://sso.example.com");
/// assert!(validate_required_string("   ", "app_id").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{} is required", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 필드 정리
///
/// `None`, 빈 문자열, 공백만 있는 문자열은 모두 `None`이 됩니다.
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

/// serde 역직렬화 시 선택적 문자열을 [`clean_optional_string`] 규칙으로 정리합니다.
///
/// ```rust,ignore
/// #[derive(Deserialize)]
/// struct Request {
///     #[serde(default, deserialize_with = "deserialize_optional_string")]
///     discovery_url: Option<String>,
/// }
/// ```
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 비밀값을 화면 표시용으로 가립니다.
///
/// 앞 2글자와 뒤 2글자만 남기고 나머지는 `*`로 바꿉니다.
/// 4글자 이하이면 전체를 `*`로 바꾸고, 빈 문자열은 그대로 둡니다.
///
/// ```text
/// "abcdefgh" → "ab****gh"
/// "abcd"     → "****"
/// ```
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    let len = chars.len();

    if len <= 4 {
        return "*".repeat(len);
    }

    let head: String = chars[..2].iter().collect();
    let tail: String = chars[len - 2..].iter().collect();
    format!("{}{}{}", head, "*".repeat(len - 4), tail)
}
