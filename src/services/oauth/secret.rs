//! Client Secret 인코딩
//!
//! 통합 설정 행의 `app_secret`은 인코딩된 형태로 저장됩니다.
//! 저장 방식은 [`SecretCodec`]으로 교체할 수 있습니다.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::errors::errors::AppError;

pub trait SecretCodec: Send + Sync {
    fn encode(&self, plain: &str) -> String;
    fn decode(&self, encoded: &str) -> Result<String, AppError>;
}

/// 표준 base64 코덱
#[derive(Debug, Clone, Copy, Default)]
pub struct Base64SecretCodec;

impl SecretCodec for Base64SecretCodec {
    fn encode(&self, plain: &str) -> String {
        STANDARD.encode(plain.as_bytes())
    }

    fn decode(&self, encoded: &str) -> Result<String, AppError> {
        let bytes = STANDARD
            .decode(encoded.trim())
            .map_err(|e| AppError::InternalError(format!("Client Secret 디코딩 실패: {}", e)))?;
        String::from_utf8(bytes)
            .map_err(|e| AppError::InternalError(format!("Client Secret이 UTF-8이 아닙니다: {}", e)))
    }
}
