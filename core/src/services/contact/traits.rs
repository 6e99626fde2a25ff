//! Gateway seam consumed by the contact SMS service

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Outcome of a gateway request
///
/// Gateways report failure as a value rather than an error: a failed
/// delivery is an expected runtime condition, not an exception.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl GatewayResponse {
    /// A successful request, with the provider's message identifier
    pub fn delivered(message_id: impl Into<String>) -> Self {
        Self {
            success: true,
            message_id: Some(message_id.into()),
            error: None,
        }
    }

    /// A successful request without a message identifier (e.g. unblock)
    pub fn accepted() -> Self {
        Self {
            success: true,
            message_id: None,
            error: None,
        }
    }

    /// A failed request
    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            message_id: None,
            error: Some(reason.into()),
        }
    }

    pub fn success(&self) -> bool {
        self.success
    }

    pub fn message_id(&self) -> Option<&str> {
        self.message_id.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Upstream SMS delivery and unblock provider
#[async_trait]
pub trait SmsGateway: Send + Sync {
    /// Deliver one message to a phone number
    async fn deliver(&self, message: &str, phone_number: &str) -> GatewayResponse;

    /// Ask the provider to lift the blocked status of a phone number
    async fn unblock(&self, phone_number: &str) -> GatewayResponse;

    /// Name of the provider (e.g. "Mock", "Http")
    fn provider_name(&self) -> &str;
}
