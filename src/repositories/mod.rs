//! # Repository Layer
//!
//! MongoDB 컬렉션 접근을 담당합니다. 서비스 계층은 구체 타입 대신
//! [`integrations::IntegrationStore`] trait에 의존하므로 테스트에서는 메모리 저장소로 대체할 수 있습니다.

pub mod integrations;
