//! # Textable Core
//!
//! Core domain and business logic for the Textable SMS contact lifecycle:
//! the contact record seam, confirmation codes, and the service that
//! drives confirmation, outbound delivery and unblock requests against an
//! SMS gateway.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{code_matches, generate_code, ContactRecord, SmsState, StoreError, CODE_LENGTH};
pub use errors::{SmsError, SmsResult};
pub use services::{
    ChunkDelivery, ConfirmationOutcome, ContactSmsConfig, ContactSmsService, GatewayResponse,
    SendOutcome, SkipReason, SmsGateway,
};
