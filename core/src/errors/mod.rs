//! Error types for SMS lifecycle operations
//!
//! Gateway failures are expected runtime conditions and are reported as
//! values, never as errors. Only malformed caller input (oversized text)
//! and persistence failures surface through [`SmsError`].

use thiserror::Error;

use crate::domain::contact::StoreError;

/// Errors raised by SMS lifecycle operations
#[derive(Error, Debug)]
pub enum SmsError {
    /// Message text exceeds the single-message limit without explicit
    /// multi-message consent.
    #[error(
        "message is {length} characters, limit is {limit}; \
         either shorten the text or explicitly allow multiple messages"
    )]
    MessageTooLong { length: usize, limit: usize },

    /// The record's save failed; propagated untranslated.
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type SmsResult<T> = Result<T, SmsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_too_long_names_both_lengths() {
        let err = SmsError::MessageTooLong {
            length: 165,
            limit: 160,
        };
        let message = err.to_string();
        assert!(message.contains("165"));
        assert!(message.contains("160"));
    }

    #[test]
    fn store_errors_pass_through_unwrapped() {
        let err: SmsError = StoreError::new("row lock timeout").into();
        assert_eq!(
            err.to_string(),
            "failed to persist contact record: row lock timeout"
        );
    }
}
