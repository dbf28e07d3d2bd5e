use auth_client::{AuthService, SessionData};
use dioxus::prelude::*;

/// Where the app stands with respect to an authenticated session
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    /// Not asked the server yet
    Unknown,
    /// Session read-back in flight
    Resolving,
    /// Somebody is signed in
    Authenticated(SessionData),
    /// Nobody is signed in
    Anonymous,
}

/// Shared session context, provided once at the app root.
///
/// Screens that need the authentication status take this from context
/// instead of reaching for a global.
#[derive(Clone, Copy)]
pub struct SessionContext {
    state: Signal<SessionState>,
}

impl SessionContext {
    /// Put a fresh context into scope at the current component.
    pub fn provide() -> Self {
        use_context_provider(|| Self {
            state: Signal::new(SessionState::Unknown),
        })
    }

    pub fn state(&self) -> SessionState {
        self.state.read().clone()
    }

    /// Ask the server who is signed in and store the answer.
    ///
    /// A failed read-back counts as anonymous; the user can always sign in
    /// again, while a stuck "resolving" state would dead-end the UI.
    pub async fn refresh(&mut self, auth: &AuthService) {
        self.state.set(SessionState::Resolving);
        match auth.session().await {
            Ok(Some(data)) => {
                log::info!("session active for {}", data.user.email);
                self.state.set(SessionState::Authenticated(data));
            }
            Ok(None) => self.state.set(SessionState::Anonymous),
            Err(e) => {
                log::warn!("session read-back failed: {}", e);
                self.state.set(SessionState::Anonymous);
            }
        }
    }

    /// Tear the session down: tell the server, then forget it locally.
    ///
    /// Local state clears even when the server call fails; an unreachable
    /// backend must not trap the UI in a signed-in state.
    pub async fn sign_out(&mut self, auth: &AuthService) {
        if let Err(e) = auth.sign_out().await {
            log::warn!("server sign-out failed: {}", e);
        }
        self.state.set(SessionState::Anonymous);
    }
}
