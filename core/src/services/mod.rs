//! Business services

pub mod contact;

pub use contact::{
    ChunkDelivery, ConfirmationOutcome, ContactSmsConfig, ContactSmsService, GatewayResponse,
    SendOutcome, SkipReason, SmsGateway,
};
