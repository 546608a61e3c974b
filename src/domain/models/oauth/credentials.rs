//! OAuth 클라이언트 자격 증명

use serde::{Deserialize, Serialize};

/// OAuth 클라이언트 자격 증명
///
/// GitHub/Google은 환경 변수에서, 범용 프로바이더는 통합 설정 행에서 만들어집니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OAuthCredentials {
    pub client_id: String,
    pub client_secret: String,
    /// 인가 요청과 토큰 교환에 똑같이 쓰여야 하는 콜백 주소
    pub redirect_uri: String,
}

impl OAuthCredentials {
    pub fn new(client_id: String, client_secret: String, redirect_uri: String) -> Self {
        Self {
            client_id,
            client_secret,
            redirect_uri,
        }
    }
}

/// 토큰 엔드포인트 클라이언트 인증 방식
///
/// - `client_secret_post`: 폼 본문에 `client_id`, `client_secret` 포함 (기본값)
/// - `client_secret_basic`: HTTP Basic 인증 헤더 사용
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenAuthMethod {
    #[default]
    ClientSecretPost,
    ClientSecretBasic,
}

impl TokenAuthMethod {
    /// 관리자 입력값을 해석합니다.
    ///
    /// 앞뒤 공백과 대소문자를 무시하며, `client_secret_basic` 이외의 값은 모두 post 방식입니다.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("client_secret_basic") {
            TokenAuthMethod::ClientSecretBasic
        } else {
            TokenAuthMethod::ClientSecretPost
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenAuthMethod::ClientSecretPost => "client_secret_post",
            TokenAuthMethod::ClientSecretBasic => "client_secret_basic",
        }
    }
}
