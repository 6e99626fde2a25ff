//! Contact SMS service implementation

use std::sync::Arc;

use chrono::Utc;
use tracing;

use crate::domain::confirmation::{code_matches, generate_code};
use crate::domain::contact::ContactRecord;
use crate::errors::{SmsError, SmsResult};

use tx_shared::phone::{internationalize, is_blank, mask_phone_number, numerize};
use tx_shared::text::chunk;

use super::config::ContactSmsConfig;
use super::traits::SmsGateway;
use super::types::{ChunkDelivery, ConfirmationOutcome, SendOutcome, SkipReason};

/// Drives the SMS lifecycle of contact records against a gateway
///
/// One service instance serves any number of records; every operation is
/// invoked with the record it applies to. Operations perform at most one
/// sequence of gateway calls followed by at most one save, with no
/// internal locking; concurrent operations against the same record must
/// be serialized by the caller.
pub struct ContactSmsService<G: SmsGateway + ?Sized> {
    /// Gateway used for delivery and unblock requests
    gateway: Arc<G>,
    /// Service configuration
    config: ContactSmsConfig,
}

impl<G: SmsGateway + ?Sized> ContactSmsService<G> {
    /// Create a service with default configuration
    pub fn new(gateway: Arc<G>) -> Self {
        Self::with_config(gateway, ContactSmsConfig::default())
    }

    /// Create a service with explicit configuration
    pub fn with_config(gateway: Arc<G>, config: ContactSmsConfig) -> Self {
        Self { gateway, config }
    }

    pub fn config(&self) -> &ContactSmsConfig {
        &self.config
    }

    /// Normalize a free-form phone number into international format
    pub fn normalize(&self, input: Option<&str>) -> Option<String> {
        internationalize(input)
    }

    /// Send one or more text messages to the record's confirmed number.
    ///
    /// Text longer than the single-message limit needs `allow_multiple` to
    /// clarify that splitting into several messages is intentional; without
    /// it the call fails with [`SmsError::MessageTooLong`].
    ///
    /// Returns per-segment delivery results in order. Segments are
    /// independent: a failure neither retries nor rolls back the segments
    /// already delivered.
    pub async fn send_message<R: ContactRecord>(
        &self,
        record: &mut R,
        text: &str,
        allow_multiple: bool,
    ) -> SmsResult<SendOutcome> {
        let length = text.chars().count();
        let limit = self.config.single_message_limit;
        if length > limit && !allow_multiple {
            return Err(SmsError::MessageTooLong { length, limit });
        }

        if text.trim().is_empty() {
            return Ok(SendOutcome::Skipped(SkipReason::EmptyMessage));
        }
        if record.sms_blocked() {
            return Ok(SendOutcome::Skipped(SkipReason::Blocked));
        }
        if !record.sms_confirmed() {
            return Ok(SendOutcome::Skipped(SkipReason::Unconfirmed));
        }

        let phone = record.phone_number().unwrap_or("").to_string();
        let mut deliveries = Vec::new();
        for segment in chunk(text, limit) {
            let response = self.gateway.deliver(&segment, &phone).await;
            if response.success() {
                deliveries.push(ChunkDelivery::Delivered {
                    characters: segment.chars().count(),
                });
            } else {
                tracing::warn!(
                    phone = %mask_phone_number(&phone),
                    event = "segment_delivery_failed",
                    error = response.error().unwrap_or("unknown"),
                    "Gateway refused a message segment"
                );
                deliveries.push(ChunkDelivery::Failed);
            }
        }

        tracing::info!(
            phone = %mask_phone_number(&phone),
            event = "message_sent",
            segments = deliveries.len(),
            delivered = deliveries.iter().filter(|d| d.is_delivered()).count(),
            "Outbound message processed"
        );

        Ok(SendOutcome::Sent(deliveries))
    }

    /// Issue a confirmation code and send it to the record's number.
    ///
    /// Idempotent for already-confirmed records. On delivery success the
    /// record is updated in one step (new code, attempt timestamp, cleared
    /// confirmed number) and persisted; delivery failure leaves the record
    /// untouched.
    pub async fn send_confirmation<R: ContactRecord>(
        &self,
        record: &mut R,
    ) -> SmsResult<ConfirmationOutcome> {
        if record.sms_blocked() {
            return Ok(ConfirmationOutcome::Blocked);
        }
        if record.sms_confirmed() {
            return Ok(ConfirmationOutcome::AlreadyConfirmed);
        }
        if is_blank(record.phone_number()) {
            return Ok(ConfirmationOutcome::MissingPhoneNumber);
        }

        let code = generate_code();
        let message = self.config.confirmation_message(&code);

        let length = message.chars().count();
        let limit = self.config.single_message_limit;
        if length > limit {
            // Confirmation messages are never auto-split.
            return Err(SmsError::MessageTooLong { length, limit });
        }

        let phone = record.phone_number().unwrap_or("").to_string();
        let response = self.gateway.deliver(&message, &phone).await;
        if !response.success() {
            tracing::warn!(
                phone = %mask_phone_number(&phone),
                event = "confirmation_delivery_failed",
                error = response.error().unwrap_or("unknown"),
                "Gateway refused the confirmation message"
            );
            return Ok(ConfirmationOutcome::DeliveryFailed);
        }

        // A new code invalidates any prior confirmation.
        record.set_confirmation_code(Some(code));
        record.set_confirmation_attempted_at(Some(Utc::now()));
        record.set_confirmed_phone_number(None);
        self.persist(record).await?;

        tracing::info!(
            phone = %mask_phone_number(&phone),
            event = "confirmation_sent",
            "Confirmation code issued and delivered"
        );

        Ok(ConfirmationOutcome::Sent)
    }

    /// Compare a user-provided code with the stored confirmation code.
    ///
    /// On a case-insensitive match the *current* phone number is recorded
    /// as confirmed and the record persisted. The number may have changed
    /// since the code was issued; the historically observed behavior is to
    /// confirm whatever number is current.
    pub async fn confirm<R: ContactRecord>(&self, record: &mut R, code: &str) -> SmsResult<bool> {
        if !code_matches(record.confirmation_code(), code) {
            tracing::debug!(
                phone = %mask_phone_number(record.phone_number().unwrap_or("")),
                event = "confirmation_rejected",
                "Supplied confirmation code did not match"
            );
            return Ok(false);
        }

        let current = record.phone_number().map(str::to_string);
        record.set_confirmed_phone_number(current);
        self.persist(record).await?;

        tracing::info!(
            phone = %mask_phone_number(record.phone_number().unwrap_or("")),
            event = "number_confirmed",
            "Phone number confirmed by its owner"
        );

        Ok(true)
    }

    /// Ask the gateway to lift the blocked status of the record's number.
    ///
    /// No-op (`Ok(false)`) when the record is not blocked. On gateway
    /// success the blocked flag is cleared and the record persisted.
    pub async fn unblock<R: ContactRecord>(&self, record: &mut R) -> SmsResult<bool> {
        if !record.sms_blocked() {
            return Ok(false);
        }

        let phone = record.phone_number().unwrap_or("").to_string();
        let response = self.gateway.unblock(&phone).await;
        if !response.success() {
            tracing::warn!(
                phone = %mask_phone_number(&phone),
                event = "unblock_failed",
                error = response.error().unwrap_or("unknown"),
                "Gateway refused the unblock request"
            );
            return Ok(false);
        }

        record.set_sms_blocked(false);
        self.persist(record).await?;

        tracing::info!(
            phone = %mask_phone_number(&phone),
            event = "number_unblocked",
            "Blocked status lifted"
        );

        Ok(true)
    }

    /// Save the record, numerizing the phone number first when configured
    async fn persist<R: ContactRecord>(&self, record: &mut R) -> SmsResult<()> {
        if self.config.normalize_before_save {
            let digits = numerize(record.phone_number());
            record.set_phone_number(if digits.is_empty() { None } else { Some(digits) });
        }
        record.save().await.map_err(SmsError::from)
    }
}
