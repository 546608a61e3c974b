pub mod system_integration;
pub mod oauth2_config;

pub use system_integration::{IntegrationClassify, SystemIntegration};
pub use oauth2_config::OAuth2IntegrationConfig;
