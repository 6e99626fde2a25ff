//! Common utility functions

pub mod phone;
pub mod text;

// Re-export commonly used utilities
pub use phone::*;
pub use text::*;
