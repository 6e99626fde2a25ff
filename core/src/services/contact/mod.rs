//! Contact SMS lifecycle service
//!
//! Orchestrates confirmation, outbound delivery and unblock requests for a
//! single contact record against an SMS gateway.

pub mod config;
pub mod service;
pub mod traits;
pub mod types;

pub use config::{default_confirmation_message, ConfirmationMessageFn, ContactSmsConfig};
pub use service::ContactSmsService;
pub use traits::{GatewayResponse, SmsGateway};
pub use types::{ChunkDelivery, ConfirmationOutcome, SendOutcome, SkipReason};

#[cfg(test)]
mod tests;
