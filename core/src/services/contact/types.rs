//! Outcome types for contact SMS operations

use serde::{Deserialize, Serialize};

/// Why an operation was skipped without touching the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// Message text was empty or whitespace-only
    EmptyMessage,
    /// Record is administratively blocked
    Blocked,
    /// Current phone number has not been confirmed
    Unconfirmed,
}

/// Fate of one delivered message segment
///
/// Each segment is delivered independently; a failed segment does not roll
/// back the ones already sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChunkDelivery {
    /// Segment accepted by the gateway; carries its character count
    Delivered { characters: usize },
    /// Gateway reported failure for this segment
    Failed,
}

impl ChunkDelivery {
    pub fn is_delivered(&self) -> bool {
        matches!(self, ChunkDelivery::Delivered { .. })
    }
}

/// Result of [`send_message`](crate::services::contact::ContactSmsService::send_message)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SendOutcome {
    /// Nothing was sent
    Skipped(SkipReason),
    /// Per-segment delivery results, in segment order
    Sent(Vec<ChunkDelivery>),
}

impl SendOutcome {
    /// True when every segment was delivered
    pub fn fully_delivered(&self) -> bool {
        match self {
            SendOutcome::Skipped(_) => false,
            SendOutcome::Sent(deliveries) => {
                !deliveries.is_empty() && deliveries.iter().all(ChunkDelivery::is_delivered)
            }
        }
    }
}

/// Result of [`send_confirmation`](crate::services::contact::ContactSmsService::send_confirmation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfirmationOutcome {
    /// The current number is already confirmed; nothing to do
    AlreadyConfirmed,
    /// Record is blocked; no code issued
    Blocked,
    /// Record has no phone number to confirm
    MissingPhoneNumber,
    /// Gateway refused the confirmation message; record unchanged
    DeliveryFailed,
    /// Code issued, message delivered and record persisted
    Sent,
}

impl ConfirmationOutcome {
    /// True for the outcomes the caller can treat as success
    pub fn succeeded(&self) -> bool {
        matches!(
            self,
            ConfirmationOutcome::AlreadyConfirmed | ConfirmationOutcome::Sent
        )
    }
}
