use serde::{Deserialize, Serialize};
use crate::config::AuthProvider;
use crate::domain::models::oauth::OAuthUserInfo;

/// 콜백 처리 결과
///
/// 세션 발급은 상위 애플리케이션이 담당하므로 정규화된 사용자 정보만 돌려줍니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthLoginResponse {
    pub provider: AuthProvider,
    pub user: OAuthUserInfo,
    /// 인가 요청 시 전달한 `state` (초대 토큰)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SsoUrlResponse {
    pub url: String,
}
