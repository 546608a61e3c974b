//! 캐싱 계층 모듈
//!
//! Redis 연결과 JSON 직렬화 캐시를 제공합니다.
//! 연동 설정 행 캐시와 공개 API 호스트(`api_host`) 조회에 쓰입니다.
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let cache = RedisClient::new().await?;
//! cache.set_with_expiry("integration_repository:oauth2", &row, 60).await?;
//! let host = cache.get_string("api_host").await?;
//! ```
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
