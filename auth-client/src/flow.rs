//! Outcome handling shared by the credential forms.

use crate::models::FormState;
use crate::service::AuthError;
use std::future::Future;
use std::time::Duration;

/// How long the federated hand-off may take before the form is unlocked again
pub const REDIRECT_TIMEOUT: Duration = Duration::from_secs(15);

/// Apply a finished credential submission to its form.
///
/// Returns `true` when the caller should navigate to the signed-in
/// destination; the form is left locked because it is about to unmount.
/// On failure the form is unlocked and shows the collapsed message.
pub fn resolve_submission(form: &mut FormState, outcome: Result<(), AuthError>) -> bool {
    match outcome {
        Ok(()) => true,
        Err(error) => {
            log::warn!("submission failed: {}", error);
            form.fail(error.user_message());
            false
        }
    }
}

/// Bound the wait for a federated redirect URL.
///
/// A provider flow that never produces a redirect must not leave the form
/// submitting forever; past `limit` the attempt fails with
/// [`AuthError::RedirectTimeout`].
pub async fn with_redirect_timeout<F>(request: F, limit: Duration) -> Result<String, AuthError>
where
    F: Future<Output = Result<String, AuthError>>,
{
    match tokio::time::timeout(limit, request).await {
        Ok(outcome) => outcome,
        Err(_) => Err(AuthError::RedirectTimeout),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::GENERIC_ERROR;

    #[test]
    fn test_success_signals_navigation_and_keeps_form_locked() {
        let mut form = FormState::idle();
        assert!(form.begin_submit());

        assert!(resolve_submission(&mut form, Ok(())));
        // the form is torn down by navigation, not unlocked
        assert!(form.submitting);
        assert_eq!(form.error, None);
    }

    #[test]
    fn test_failure_unlocks_form_with_server_message() {
        let mut form = FormState::idle();
        form.begin_submit();

        let outcome = Err(AuthError::Rejected {
            message: Some("Invalid credentials".to_string()),
        });
        assert!(!resolve_submission(&mut form, outcome));
        assert!(!form.submitting);
        assert_eq!(form.error.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn test_failure_without_message_uses_fallback() {
        let mut form = FormState::idle();
        form.begin_submit();

        let outcome = Err(AuthError::Rejected { message: None });
        resolve_submission(&mut form, outcome);
        assert_eq!(form.error.as_deref(), Some(GENERIC_ERROR));
    }

    #[test]
    fn test_retry_after_failure_clears_error() {
        let mut form = FormState::idle();
        form.begin_submit();
        resolve_submission(
            &mut form,
            Err(AuthError::NetworkError("connection reset".to_string())),
        );
        assert!(form.error.is_some());

        assert!(form.begin_submit());
        assert_eq!(form.error, None);
    }

    #[tokio::test]
    async fn test_redirect_timeout_elapses() {
        let never = std::future::pending::<Result<String, AuthError>>();
        let outcome = with_redirect_timeout(never, Duration::from_millis(10)).await;
        assert_eq!(outcome, Err(AuthError::RedirectTimeout));
    }

    #[tokio::test]
    async fn test_redirect_url_passes_through() {
        let ready = async { Ok("https://accounts.example.com/oauth".to_string()) };
        let outcome = with_redirect_timeout(ready, Duration::from_secs(1)).await;
        assert_eq!(
            outcome,
            Ok("https://accounts.example.com/oauth".to_string())
        );
    }
}
