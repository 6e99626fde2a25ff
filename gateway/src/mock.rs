//! Mock SMS gateway
//!
//! Logs messages instead of sending them. Useful for development and for
//! exercising the lifecycle in tests: deliveries and unblock requests are
//! recorded in memory and failure can be simulated.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use tx_core::services::contact::{GatewayResponse, SmsGateway};
use tx_shared::phone::mask_phone_number;

/// A delivery recorded by the mock gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedMessage {
    pub phone_number: String,
    pub message: String,
}

/// Mock gateway for development and testing
#[derive(Clone, Default)]
pub struct MockGateway {
    message_count: Arc<AtomicU64>,
    messages: Arc<Mutex<Vec<RecordedMessage>>>,
    unblocked: Arc<Mutex<Vec<String>>>,
    simulate_failure: bool,
    console_output: bool,
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            console_output: true,
            ..Default::default()
        }
    }

    /// Create a mock with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            console_output,
            simulate_failure,
            ..Default::default()
        }
    }

    /// Total number of messages accepted
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Messages accepted so far, in delivery order
    pub fn messages(&self) -> Vec<RecordedMessage> {
        self.messages.lock().unwrap().clone()
    }

    /// Phone numbers unblocked so far
    pub fn unblocked_numbers(&self) -> Vec<String> {
        self.unblocked.lock().unwrap().clone()
    }

    pub fn reset(&self) {
        self.message_count.store(0, Ordering::SeqCst);
        self.messages.lock().unwrap().clear();
        self.unblocked.lock().unwrap().clear();
    }
}

#[async_trait]
impl SmsGateway for MockGateway {
    async fn deliver(&self, message: &str, phone_number: &str) -> GatewayResponse {
        let masked = mask_phone_number(phone_number);

        if self.simulate_failure {
            warn!(
                phone = %masked,
                event = "mock_delivery_refused",
                "Mock gateway simulating delivery failure"
            );
            return GatewayResponse::failed("simulated delivery failure");
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        self.messages.lock().unwrap().push(RecordedMessage {
            phone_number: phone_number.to_string(),
            message: message.to_string(),
        });

        if self.console_output {
            println!("--- MOCK SMS #{} to {} ---", count, phone_number);
            println!("{}", message);
            println!("---");
        }

        info!(
            target: "sms_gateway",
            provider = "mock",
            phone = %masked,
            message_id = %message_id,
            message_length = message.chars().count(),
            "SMS accepted (mock)"
        );

        GatewayResponse::delivered(message_id)
    }

    async fn unblock(&self, phone_number: &str) -> GatewayResponse {
        if self.simulate_failure {
            warn!(
                phone = %mask_phone_number(phone_number),
                event = "mock_unblock_refused",
                "Mock gateway simulating unblock failure"
            );
            return GatewayResponse::failed("simulated unblock failure");
        }

        self.unblocked.lock().unwrap().push(phone_number.to_string());
        info!(
            target: "sms_gateway",
            provider = "mock",
            phone = %mask_phone_number(phone_number),
            "Unblock accepted (mock)"
        );
        GatewayResponse::accepted()
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn records_accepted_messages_in_order() {
        let gateway = MockGateway::with_options(false, false);

        let first = gateway.deliver("one", "+12345678901").await;
        let second = gateway.deliver("two", "+12345678901").await;

        assert!(first.success());
        assert!(second.success());
        assert!(first.message_id().unwrap().starts_with("mock_"));
        assert_eq!(gateway.message_count(), 2);
        let messages = gateway.messages();
        assert_eq!(messages[0].message, "one");
        assert_eq!(messages[1].message, "two");
    }

    #[tokio::test]
    async fn simulated_failure_reports_without_recording() {
        let gateway = MockGateway::with_options(false, true);

        let response = gateway.deliver("hello", "+12345678901").await;

        assert!(!response.success());
        assert!(response.error().unwrap().contains("simulated"));
        assert_eq!(gateway.message_count(), 0);
    }

    #[tokio::test]
    async fn unblock_records_the_number() {
        let gateway = MockGateway::with_options(false, false);

        let response = gateway.unblock("+12345678901").await;

        assert!(response.success());
        assert_eq!(gateway.unblocked_numbers(), ["+12345678901".to_string()]);
    }

    #[tokio::test]
    async fn reset_clears_everything() {
        let gateway = MockGateway::with_options(false, false);
        gateway.deliver("one", "+12345678901").await;
        gateway.unblock("+12345678901").await;

        gateway.reset();

        assert_eq!(gateway.message_count(), 0);
        assert!(gateway.messages().is_empty());
        assert!(gateway.unblocked_numbers().is_empty());
    }

    #[test]
    fn provider_name() {
        assert_eq!(MockGateway::new().provider_name(), "Mock");
    }
}
