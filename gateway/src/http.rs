//! Generic HTTP SMS gateway
//!
//! Talks to a provider over plain HTTP: messages are form-POSTed to the
//! configured endpoint, unblock requests to `<endpoint>/unblock`. Basic
//! auth carries the configured key/secret. The response status code
//! decides success; when the body is JSON with an `id` field it becomes
//! the message identifier.
//!
//! Delivery failures are reported as failed [`GatewayResponse`]s, never as
//! errors, and nothing is retried; retry policy belongs to the caller.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error, info};

use tx_core::services::contact::{GatewayResponse, SmsGateway};
use tx_shared::config::GatewayConfig;
use tx_shared::phone::mask_phone_number;

use crate::GatewayError;

#[derive(Debug, Deserialize)]
struct ProviderReceipt {
    id: Option<String>,
}

/// HTTP gateway implementation
pub struct HttpGateway {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    api_secret: String,
    from_number: String,
}

impl HttpGateway {
    /// Create a gateway from configuration; the endpoint is required.
    pub fn new(config: &GatewayConfig) -> Result<Self, GatewayError> {
        if config.endpoint.is_empty() {
            return Err(GatewayError::Config(
                "HTTP gateway requires an endpoint".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| GatewayError::Config(e.to_string()))?;

        info!(
            endpoint = %config.endpoint,
            from = %mask_phone_number(&config.from_number),
            "HTTP SMS gateway initialized"
        );

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            api_secret: config.api_secret.clone(),
            from_number: config.from_number.clone(),
        })
    }

    /// Create a gateway from `SMS_GATEWAY_*` environment variables
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::new(&GatewayConfig::from_env())
    }

    async fn post_form(&self, url: &str, form: &[(&str, &str)]) -> GatewayResponse {
        let request = self
            .client
            .post(url)
            .basic_auth(&self.api_key, Some(&self.api_secret))
            .form(form);

        match request.send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    let message_id = response
                        .json::<ProviderReceipt>()
                        .await
                        .ok()
                        .and_then(|receipt| receipt.id);
                    debug!(url = url, status = %status, "Gateway request accepted");
                    match message_id {
                        Some(id) => GatewayResponse::delivered(id),
                        None => GatewayResponse::accepted(),
                    }
                } else {
                    let body = response.text().await.unwrap_or_default();
                    error!(
                        url = url,
                        status = %status,
                        body = %body,
                        "Gateway rejected the request"
                    );
                    GatewayResponse::failed(format!("gateway returned {}", status))
                }
            }
            Err(e) => {
                error!(url = url, error = %e, "Gateway request failed");
                GatewayResponse::failed(e.to_string())
            }
        }
    }
}

#[async_trait]
impl SmsGateway for HttpGateway {
    async fn deliver(&self, message: &str, phone_number: &str) -> GatewayResponse {
        debug!(
            phone = %mask_phone_number(phone_number),
            message_length = message.chars().count(),
            "Delivering SMS via HTTP gateway"
        );
        self.post_form(
            &self.endpoint,
            &[
                ("to", phone_number),
                ("from", self.from_number.as_str()),
                ("body", message),
            ],
        )
        .await
    }

    async fn unblock(&self, phone_number: &str) -> GatewayResponse {
        let url = format!("{}/unblock", self.endpoint.trim_end_matches('/'));
        debug!(
            phone = %mask_phone_number(phone_number),
            "Requesting unblock via HTTP gateway"
        );
        self.post_form(&url, &[("number", phone_number)]).await
    }

    fn provider_name(&self) -> &str {
        "Http"
    }
}
