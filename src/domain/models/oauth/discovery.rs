use serde::Deserialize;

/// OIDC 디스커버리 문서 (`/.well-known/openid-configuration`)
///
/// 로그인에 필요한 엔드포인트만 읽고 나머지 필드는 무시합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DiscoveryDocument {
    #[serde(default)]
    pub issuer: Option<String>,
    #[serde(default)]
    pub authorization_endpoint: Option<String>,
    #[serde(default)]
    pub token_endpoint: Option<String>,
    #[serde(default)]
    pub userinfo_endpoint: Option<String>,
    #[serde(default)]
    pub end_session_endpoint: Option<String>,
}
