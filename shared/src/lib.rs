//! Shared utilities and common types for Textable
//!
//! This crate provides the leaf functionality used across the workspace:
//! - Phone number normalization and validation
//! - Message segmentation for gateway size limits
//! - Gateway configuration types

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::GatewayConfig;
pub use utils::{phone, text};
