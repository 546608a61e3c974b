use serde::{Deserialize, Serialize};

/// 프로바이더와 무관하게 정규화된 사용자 식별 정보
///
/// 로그인 콜백마다 새로 만들어지며 이 서비스에서는 저장하지 않습니다.
/// 세션 생성과 계정 연결은 호출자의 몫입니다.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthUserInfo {
    /// 프로바이더 내 고유 식별자
    pub id: String,
    /// 표시 이름 (프로바이더가 주지 않으면 빈 문자열)
    pub name: String,
    /// 이메일 주소
    pub email: String,
}

impl OAuthUserInfo {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// 모든 필드가 비어 있는지 여부 (설정되지 않은 프로바이더의 응답)
    pub fn is_empty(&self) -> bool {
        self.id.is_empty() && self.name.is_empty() && self.email.is_empty()
    }
}
