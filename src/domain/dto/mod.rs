//! # Data Transfer Objects (DTO) Module

pub mod oauth;
pub mod integrations;

pub use oauth::*;
pub use integrations::*;
