//! Domain layer: the contact record seam and confirmation codes

pub mod confirmation;
pub mod contact;

pub use confirmation::{code_matches, generate_code, CODE_LENGTH};
pub use contact::{ContactRecord, SmsState, StoreError};
