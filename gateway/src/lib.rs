//! SMS gateway implementations
//!
//! Provides the gateways the core service talks to:
//!
//! - **Mock**: console echo and in-memory recording for development and tests
//! - **Http**: a generic HTTP provider driven by [`GatewayConfig`]
//!
//! plus a factory selecting the implementation from configuration.

use std::sync::Arc;

use thiserror::Error;

use tx_core::services::contact::SmsGateway;
use tx_shared::config::GatewayConfig;

pub mod http;
pub mod mock;

pub use http::HttpGateway;
pub use mock::MockGateway;

/// Errors raised while constructing a gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("gateway configuration error: {0}")]
    Config(String),
}

/// Create a gateway based on the configured provider.
///
/// Unknown providers and misconfigured HTTP gateways fall back to the mock
/// implementation with a warning, so a development environment never fails
/// to start over SMS credentials.
pub fn create_gateway(config: &GatewayConfig) -> Arc<dyn SmsGateway> {
    match config.provider.as_str() {
        "mock" => Arc::new(MockGateway::new()),
        "http" => match HttpGateway::new(config) {
            Ok(gateway) => Arc::new(gateway),
            Err(e) => {
                tracing::error!("Failed to initialize HTTP SMS gateway: {}", e);
                tracing::warn!("Falling back to mock SMS gateway");
                Arc::new(MockGateway::new())
            }
        },
        other => {
            tracing::warn!("Unknown SMS gateway provider '{}', using mock", other);
            Arc::new(MockGateway::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_provider_selects_mock() {
        let gateway = create_gateway(&GatewayConfig::default());
        assert_eq!(gateway.provider_name(), "Mock");
    }

    #[test]
    fn unknown_provider_falls_back_to_mock() {
        let mut config = GatewayConfig::default();
        config.provider = "carrier-pigeon".to_string();
        let gateway = create_gateway(&config);
        assert_eq!(gateway.provider_name(), "Mock");
    }

    #[test]
    fn misconfigured_http_falls_back_to_mock() {
        let mut config = GatewayConfig::default();
        config.provider = "http".to_string();
        // No endpoint configured.
        let gateway = create_gateway(&config);
        assert_eq!(gateway.provider_name(), "Mock");
    }

    #[test]
    fn http_provider_selects_http() {
        let mut config = GatewayConfig::default();
        config.provider = "http".to_string();
        config.endpoint = "https://sms.example.com/messages".to_string();
        config.from_number = "+12345678901".to_string();
        let gateway = create_gateway(&config);
        assert_eq!(gateway.provider_name(), "Http");
    }
}
