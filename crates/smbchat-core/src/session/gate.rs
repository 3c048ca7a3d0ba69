//! The info-collection gate.

use smbchat_types::chat::SessionState;
use smbchat_types::contact::ContactRecord;
use smbchat_types::error::{SessionError, ValidationError};

/// Form field names, also used in validation errors.
pub const NAME_FIELD: &str = "customer_name";
pub const EMAIL_FIELD: &str = "user_email";

/// Two-state gate: chat is blocked until contact info has been submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionGate {
    state: SessionState,
}

impl SessionGate {
    /// Start a gate with the display name restored from the contact store.
    ///
    /// The gate stays closed until [`SessionGate::mark_collected`] is called.
    pub fn initialize(restored_name: impl Into<String>) -> Self {
        Self {
            state: SessionState {
                info_collected: false,
                customer_name: restored_name.into(),
            },
        }
    }

    /// Check both fields are present and build the record to persist.
    ///
    /// Does not touch gate state, so a failed submission commits nothing.
    pub fn validate_info(name: &str, email: &str) -> Result<ContactRecord, ValidationError> {
        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingField(NAME_FIELD));
        }
        if email.is_empty() {
            return Err(ValidationError::MissingField(EMAIL_FIELD));
        }
        Ok(ContactRecord::new(name, email))
    }

    /// Open the gate. Calling it again just updates the name.
    pub fn mark_collected(&mut self, record: &ContactRecord) {
        self.state.info_collected = true;
        self.state.customer_name = record.name.clone();
    }

    /// Returns the customer name when chat is allowed.
    pub fn require_collected(&self) -> Result<&str, SessionError> {
        if self.state.info_collected {
            Ok(&self.state.customer_name)
        } else {
            Err(SessionError::InfoNotCollected)
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }
}
