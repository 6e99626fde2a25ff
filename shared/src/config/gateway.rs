//! SMS gateway configuration

use serde::{Deserialize, Serialize};

/// Settings for the upstream SMS gateway
///
/// `provider` selects the implementation ("mock" or "http"); the remaining
/// fields only matter for real providers.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayConfig {
    /// Gateway provider: "mock" or "http"
    #[serde(default = "default_provider")]
    pub provider: String,

    /// Base URL of the HTTP gateway
    #[serde(default)]
    pub endpoint: String,

    /// API key / account identifier
    #[serde(default)]
    pub api_key: String,

    /// API secret / auth token
    #[serde(default)]
    pub api_secret: String,

    /// Sender phone number (E.164)
    #[serde(default)]
    pub from_number: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_provider() -> String {
    "mock".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            endpoint: String::new(),
            api_key: String::new(),
            api_secret: String::new(),
            from_number: String::new(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl GatewayConfig {
    /// Build configuration from `SMS_GATEWAY_*` environment variables,
    /// falling back to defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            provider: std::env::var("SMS_GATEWAY_PROVIDER")
                .unwrap_or_else(|_| default_provider()),
            endpoint: std::env::var("SMS_GATEWAY_ENDPOINT").unwrap_or_default(),
            api_key: std::env::var("SMS_GATEWAY_API_KEY").unwrap_or_default(),
            api_secret: std::env::var("SMS_GATEWAY_API_SECRET").unwrap_or_default(),
            from_number: std::env::var("SMS_GATEWAY_FROM_NUMBER").unwrap_or_default(),
            request_timeout_secs: std::env::var("SMS_GATEWAY_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_timeout_secs),
        }
    }
}
