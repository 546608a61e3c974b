//! # OAuth Domain Models Module
//!
//! 프로바이더와 무관하게 공유되는 OAuth 모델입니다.

pub mod user_info;
pub mod credentials;
pub mod discovery;

pub use user_info::OAuthUserInfo;
pub use credentials::{OAuthCredentials, TokenAuthMethod};
pub use discovery::DiscoveryDocument;
