use serde::{Deserialize, Serialize};

use crate::domain::entities::integrations::{IntegrationClassify, OAuth2IntegrationConfig};

/// 관리자 화면에 내려주는 OAuth2 설정
///
/// 설정 필드는 평탄화되어 요청 DTO와 같은 모양이 됩니다. `app_secret`은 항상 마스킹됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuth2ConfigView {
    pub classify: IntegrationClassify,
    pub status: bool,
    pub app_id: String,
    pub app_secret: String,
    #[serde(flatten)]
    pub settings: OAuth2IntegrationConfig,
}

/// `GET /admin/api/gaia/system/oauth2`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuth2ConfigResponse {
    /// 콜백 주소 구성에 쓰이는 공개 API 호스트
    pub host: String,
    pub config: OAuth2ConfigView,
}
