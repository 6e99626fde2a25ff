//! Configuration for the contact SMS service

use std::fmt;
use std::sync::Arc;

use tx_shared::text::DEFAULT_SEGMENT_LIMIT;

/// Renders the confirmation message text for a freshly issued code
pub type ConfirmationMessageFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Default confirmation message; embeds the code verbatim
pub fn default_confirmation_message(code: &str) -> String {
    format!(
        "Your confirmation code is {}. Reply with this code to confirm \
         you can receive messages at this number.",
        code
    )
}

/// Settings for [`ContactSmsService`](super::ContactSmsService)
#[derive(Clone)]
pub struct ContactSmsConfig {
    /// Maximum characters per single message (gateway segment size)
    pub single_message_limit: usize,

    /// Strip the phone number down to digits immediately before every
    /// save the service performs. Callers whose persistence layer runs
    /// its own pre-save hooks can turn this off and normalize there.
    pub normalize_before_save: bool,

    confirmation_message: ConfirmationMessageFn,
}

impl ContactSmsConfig {
    /// Replace the default confirmation message template. The rendered
    /// text must embed the code and stay within the single-message limit.
    pub fn with_confirmation_message<F>(mut self, template: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.confirmation_message = Arc::new(template);
        self
    }

    /// Render the confirmation message for `code`
    pub fn confirmation_message(&self, code: &str) -> String {
        (self.confirmation_message)(code)
    }
}

impl Default for ContactSmsConfig {
    fn default() -> Self {
        Self {
            single_message_limit: DEFAULT_SEGMENT_LIMIT,
            normalize_before_save: true,
            confirmation_message: Arc::new(|code| default_confirmation_message(code)),
        }
    }
}

impl fmt::Debug for ContactSmsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactSmsConfig")
            .field("single_message_limit", &self.single_message_limit)
            .field("normalize_before_save", &self.normalize_before_save)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_message_embeds_the_code() {
        let message = default_confirmation_message("ABC123");
        assert!(message.contains("ABC123"));
    }

    #[test]
    fn default_message_fits_a_single_segment() {
        let message = default_confirmation_message("000000");
        assert!(message.chars().count() <= DEFAULT_SEGMENT_LIMIT);
    }

    #[test]
    fn custom_template_overrides_the_default() {
        let config = ContactSmsConfig::default()
            .with_confirmation_message(|code| format!("code: {}", code));
        assert_eq!(config.confirmation_message("9999"), "code: 9999");
    }
}
