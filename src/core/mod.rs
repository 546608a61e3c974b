//! # Core Framework Module
//!
//! `singleton_macro`가 생성하는 코드가 기대하는 레지스트리를 제공합니다.
//!
//! | 매크로 | 생성 코드가 참조하는 항목 |
//! |--------|---------------------------|
//! | `#[service]` | [`registry::Service`], [`registry::ServiceRegistration`], [`registry::ServiceLocator::get`] |
//! | `#[repository]` | [`registry::Repository`], [`registry::RepositoryRegistration`] |
//!
//! 인프라 컴포넌트(`Database`, `RedisClient`)는 `main`에서 [`registry::ServiceLocator::set`]으로
//! 직접 등록합니다.

pub mod registry;

pub use registry::*;
