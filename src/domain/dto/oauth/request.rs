//! 로그인 흐름 요청 DTO
//!
//! 모두 쿼리 스트링으로 전달됩니다.

use serde::Deserialize;
use crate::utils::string_utils::deserialize_optional_string;

/// `GET /console/api/oauth/login/{provider}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginQuery {
    /// 초대 토큰. 인가 요청의 `state`로 전달되어 콜백에서 되돌아옵니다.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub invite_token: Option<String>,
}

/// `GET /console/api/oauth/authorize/{provider}` (프로바이더 콜백)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OAuthCallbackQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub state: Option<String>,
    /// 사용자가 동의를 거부하면 프로바이더가 채워 보냅니다.
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}

/// `GET /api/oauth2/sso/url` (웹앱 공유 페이지 로그인)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SsoUrlQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub app_code: Option<String>,
    /// 로그인 후 돌아갈 웹앱 경로
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub redirect_url: Option<String>,
}
