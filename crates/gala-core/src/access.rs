//! Access gate: the client-held soft gate over full gallery browsing.
//!
//! The gate is a one-way `Locked -> Unlocked` state machine owned by the
//! browser session. It is NOT an authorization boundary: the flag is not
//! cryptographically verified and a client can fabricate it. It only decides
//! whether the gallery renders as blurred previews or interactive tiles.
//! Nothing server-side may consult it for authorization of any other feature.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Session-scoped gate state. A fresh session always starts `Locked`; there
/// is no transition back once unlocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessGate {
    #[default]
    Locked,
    Unlocked,
}

impl AccessGate {
    pub fn new() -> Self {
        AccessGate::Locked
    }

    /// Fire the one-way transition. Called by the client after the
    /// registration endpoint accepted its submission. Idempotent.
    pub fn unlock(&mut self) {
        *self = AccessGate::Unlocked;
    }

    pub fn is_unlocked(&self) -> bool {
        matches!(self, AccessGate::Unlocked)
    }
}

/// Registration submission that unlocks the gate. First/last name and email
/// are required; the newsletter opt-in is not.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationForm {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    #[serde(default)]
    pub subscribe_to_newsletter: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_starts_locked_and_unlocks_one_way() {
        let mut gate = AccessGate::new();
        assert!(!gate.is_unlocked());

        gate.unlock();
        assert!(gate.is_unlocked());

        // No transition back; repeated unlocks are harmless.
        gate.unlock();
        assert!(gate.is_unlocked());
    }

    #[test]
    fn fresh_session_is_locked_again() {
        let mut gate = AccessGate::new();
        gate.unlock();
        // A new browser session builds new client state.
        let fresh = AccessGate::new();
        assert!(!fresh.is_unlocked());
    }

    #[test]
    fn registration_requires_names_and_valid_email() {
        let form = RegistrationForm {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            subscribe_to_newsletter: true,
        };
        assert!(form.validate().is_ok());

        let missing_name = RegistrationForm {
            first_name: "".into(),
            ..form.clone()
        };
        assert!(missing_name.validate().is_err());

        let bad_email = RegistrationForm {
            email: "not-an-email".into(),
            ..form
        };
        assert!(bad_email.validate().is_err());
    }

    #[test]
    fn opt_in_defaults_to_false() {
        let form: RegistrationForm = serde_json::from_str(
            r#"{"firstName":"Ada","lastName":"Lovelace","email":"ada@example.com"}"#,
        )
        .unwrap();
        assert!(!form.subscribe_to_newsletter);
    }
}
