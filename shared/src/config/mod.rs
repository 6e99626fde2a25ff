//! Configuration types shared across the workspace

pub mod gateway;

pub use gateway::GatewayConfig;
