//! Contact record seam and derived SMS state
//!
//! The persistence layer is owned by the caller; this crate only reads and
//! conditionally mutates a handful of named fields and asks the record to
//! save itself. Implementing [`ContactRecord`] against a concrete record
//! type is the per-deployment field mapping: whatever columns the fields
//! live in, the accessors below are the contract.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use tx_shared::phone::is_blank;

/// Error returned when persisting a contact record fails
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to persist contact record: {message}")]
pub struct StoreError {
    /// Description of the persistence failure
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Derived SMS state of a contact record
///
/// Never stored: computed from the blocked flag, the confirmed number and
/// the outstanding confirmation code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmsState {
    /// Outbound delivery administratively disabled
    Blocked,
    /// Current phone number confirmed by its owner
    Confirmed,
    /// A confirmation code is outstanding for an unconfirmed number
    ConfirmationPending,
    /// No confirmation issued for the current number
    Unconfirmed,
}

/// A persisted contact exposing the fields the SMS lifecycle touches
///
/// Getters return `None` for absent values; empty and whitespace-only
/// strings are treated as absent wherever blankness matters.
#[async_trait]
pub trait ContactRecord: Send {
    /// Raw or normalized dialable number
    fn phone_number(&self) -> Option<&str>;
    fn set_phone_number(&mut self, value: Option<String>);

    /// Whether outbound delivery is administratively disabled
    fn sms_blocked(&self) -> bool;
    fn set_sms_blocked(&mut self, value: bool);

    /// Last-issued one-time confirmation code
    fn confirmation_code(&self) -> Option<&str>;
    fn set_confirmation_code(&mut self, value: Option<String>);

    /// When a code was last issued
    fn confirmation_attempted_at(&self) -> Option<DateTime<Utc>>;
    fn set_confirmation_attempted_at(&mut self, value: Option<DateTime<Utc>>);

    /// The number for which confirmation last succeeded
    fn confirmed_phone_number(&self) -> Option<&str>;
    fn set_confirmed_phone_number(&mut self, value: Option<String>);

    /// Persist the record
    async fn save(&mut self) -> Result<(), StoreError>;

    /// True when the current phone number has been confirmed by its owner.
    ///
    /// Changing the phone number after confirmation implicitly un-confirms
    /// the record: the confirmed number no longer matches.
    fn sms_confirmed(&self) -> bool {
        if is_blank(self.confirmed_phone_number()) {
            return false;
        }
        self.confirmed_phone_number() == self.phone_number()
    }

    /// Derived SMS state of this record
    fn sms_state(&self) -> SmsState {
        if self.sms_blocked() {
            SmsState::Blocked
        } else if self.sms_confirmed() {
            SmsState::Confirmed
        } else if !is_blank(self.confirmation_code()) {
            SmsState::ConfirmationPending
        } else {
            SmsState::Unconfirmed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TestContact {
        phone_number: Option<String>,
        sms_blocked: bool,
        confirmation_code: Option<String>,
        confirmation_attempted_at: Option<DateTime<Utc>>,
        confirmed_phone_number: Option<String>,
    }

    #[async_trait]
    impl ContactRecord for TestContact {
        fn phone_number(&self) -> Option<&str> {
            self.phone_number.as_deref()
        }
        fn set_phone_number(&mut self, value: Option<String>) {
            self.phone_number = value;
        }
        fn sms_blocked(&self) -> bool {
            self.sms_blocked
        }
        fn set_sms_blocked(&mut self, value: bool) {
            self.sms_blocked = value;
        }
        fn confirmation_code(&self) -> Option<&str> {
            self.confirmation_code.as_deref()
        }
        fn set_confirmation_code(&mut self, value: Option<String>) {
            self.confirmation_code = value;
        }
        fn confirmation_attempted_at(&self) -> Option<DateTime<Utc>> {
            self.confirmation_attempted_at
        }
        fn set_confirmation_attempted_at(&mut self, value: Option<DateTime<Utc>>) {
            self.confirmation_attempted_at = value;
        }
        fn confirmed_phone_number(&self) -> Option<&str> {
            self.confirmed_phone_number.as_deref()
        }
        fn set_confirmed_phone_number(&mut self, value: Option<String>) {
            self.confirmed_phone_number = value;
        }
        async fn save(&mut self) -> Result<(), StoreError> {
            Ok(())
        }
    }

    #[test]
    fn fresh_record_is_unconfirmed() {
        let contact = TestContact {
            phone_number: Some("+12345678901".to_string()),
            ..Default::default()
        };
        assert!(!contact.sms_confirmed());
        assert_eq!(contact.sms_state(), SmsState::Unconfirmed);
    }

    #[test]
    fn matching_confirmed_number_means_confirmed() {
        let contact = TestContact {
            phone_number: Some("+12345678901".to_string()),
            confirmed_phone_number: Some("+12345678901".to_string()),
            ..Default::default()
        };
        assert!(contact.sms_confirmed());
        assert_eq!(contact.sms_state(), SmsState::Confirmed);
    }

    #[test]
    fn changing_the_number_unconfirms_the_record() {
        let mut contact = TestContact {
            phone_number: Some("+12345678901".to_string()),
            confirmed_phone_number: Some("+12345678901".to_string()),
            ..Default::default()
        };
        contact.set_phone_number(Some("+19998887777".to_string()));
        assert!(!contact.sms_confirmed());
    }

    #[test]
    fn blank_confirmed_number_is_never_confirmed() {
        let contact = TestContact {
            phone_number: Some("".to_string()),
            confirmed_phone_number: Some("".to_string()),
            ..Default::default()
        };
        assert!(!contact.sms_confirmed());
    }

    #[test]
    fn outstanding_code_means_pending() {
        let contact = TestContact {
            phone_number: Some("+12345678901".to_string()),
            confirmation_code: Some("123456".to_string()),
            ..Default::default()
        };
        assert_eq!(contact.sms_state(), SmsState::ConfirmationPending);
    }

    #[test]
    fn blocked_wins_over_everything_else() {
        let contact = TestContact {
            phone_number: Some("+12345678901".to_string()),
            confirmed_phone_number: Some("+12345678901".to_string()),
            sms_blocked: true,
            ..Default::default()
        };
        assert_eq!(contact.sms_state(), SmsState::Blocked);
    }
}
