use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Email and password for an existing account
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration data for a new account
///
/// `age` is optional; an unset age is left out of the request body entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

impl Registration {
    /// Build a registration record from raw form field text.
    pub fn new(name: String, email: String, password: String, age_input: &str) -> Self {
        Self {
            name,
            email,
            password,
            age: parse_age(age_input),
        }
    }
}

/// Numeric coercion for the optional age field.
///
/// Empty or non-numeric input means "unset", never an error.
pub fn parse_age(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}

/// User half of the session read-back payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Session half of the session read-back payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub expires_at: DateTime<Utc>,
}

/// Payload returned by the session endpoint for an authenticated user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    pub session: SessionInfo,
    pub user: SessionUser,
}

/// Transient submission state of one mounted credential form
///
/// Lifecycle: idle at mount; `begin_submit` locks the form and clears the
/// previous error; `fail` unlocks it with a message. Success is terminal —
/// the form navigates away and unmounts, so nothing is mutated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub submitting: bool,
    pub error: Option<String>,
}

impl FormState {
    pub fn idle() -> Self {
        Self::default()
    }

    /// Start a new submission attempt.
    ///
    /// Returns `false` and changes nothing while another attempt is still in
    /// flight, so a stray second click never produces a second request.
    pub fn begin_submit(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.error = None;
        self.submitting = true;
        true
    }

    /// The attempt failed: show the message and make the form re-submittable.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age("42"), Some(42));
        assert_eq!(parse_age(" 23 "), Some(23));
        assert_eq!(parse_age(""), None);
        assert_eq!(parse_age("abc"), None);
        assert_eq!(parse_age("-5"), None);
    }

    #[test]
    fn test_registration_with_empty_age() {
        let registration = Registration::new(
            "Jane".to_string(),
            "jane@x.com".to_string(),
            "longenough".to_string(),
            "",
        );
        assert_eq!(registration.age, None);
    }

    #[test]
    fn test_unset_age_is_omitted_from_body() {
        let registration = Registration::new(
            "Jane".to_string(),
            "jane@x.com".to_string(),
            "longenough".to_string(),
            "",
        );
        let body = serde_json::to_value(&registration).unwrap();
        assert!(body.get("age").is_none());
        assert_eq!(body["name"], "Jane");
    }

    #[test]
    fn test_numeric_age_is_serialized() {
        let registration = Registration::new(
            "Jane".to_string(),
            "jane@x.com".to_string(),
            "longenough".to_string(),
            "30",
        );
        let body = serde_json::to_value(&registration).unwrap();
        assert_eq!(body["age"], 30);
    }

    #[test]
    fn test_begin_submit_locks_and_clears_error() {
        let mut form = FormState::idle();
        form.fail("Invalid credentials");

        assert!(form.begin_submit());
        assert!(form.submitting);
        assert_eq!(form.error, None);
    }

    #[test]
    fn test_begin_submit_rejects_second_attempt() {
        let mut form = FormState::idle();
        assert!(form.begin_submit());
        assert!(!form.begin_submit());
        assert!(form.submitting);
    }

    #[test]
    fn test_fail_unlocks_form() {
        let mut form = FormState::idle();
        form.begin_submit();
        form.fail("Invalid credentials");

        assert!(!form.submitting);
        assert_eq!(form.error.as_deref(), Some("Invalid credentials"));
        // a retry is allowed after a failure
        assert!(form.begin_submit());
    }

    #[test]
    fn test_session_payload_parsing() {
        let json = r#"{
            "session": { "expiresAt": "2026-08-14T12:00:00.000Z", "token": "abc" },
            "user": { "id": "u_1", "name": "Jane", "email": "jane@x.com", "emailVerified": false }
        }"#;
        let data: SessionData = serde_json::from_str(json).unwrap();
        assert_eq!(data.user.email, "jane@x.com");
        assert_eq!(data.session.expires_at.timestamp(), 1_786_708_800);
    }
}
