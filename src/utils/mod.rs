//! 공통 유틸리티 함수 모듈
//! 
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//! 문자열 검증과 Client Secret 마스킹, 기동 로그 포맷팅을 포함합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 시크릿 마스킹
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::validate_required_string;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! let server_url = validate_required_string(&config.server_url, "server_url")?;
//! print_boxed_title("🔄 SERVICE REGISTRY");
//! ```

pub mod string_utils;
pub mod display_terminal;
