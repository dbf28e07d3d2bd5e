//! # Auth Client
//!
//! A reusable client for a better-auth compatible identity server.
//!
//! This crate provides:
//! - Typed credential and registration records
//! - Email and federated (social) sign-in over the server's REST surface
//! - Per-form submission state with an explicit double-submission guard
//! - A bounded wait for the federated redirect hand-off
//!
//! ## Separation of Concerns
//!
//! This crate focuses solely on talking to the identity server. It does **not**:
//! - Render forms or buttons (handled by the application)
//! - Decide where to navigate after sign-in (handled by the application)
//! - Persist sessions (handled by the identity server's cookies)
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use auth_client::{flow, AuthService, Credentials, FormState};
//!
//! let service = AuthService::new("https://id.example.com".to_string());
//! let mut form = FormState::idle();
//! if form.begin_submit() {
//!     let outcome = service
//!         .sign_in(&Credentials {
//!             email: "user@example.com".to_string(),
//!             password: "secret123".to_string(),
//!         })
//!         .await;
//!     if flow::resolve_submission(&mut form, outcome) {
//!         // navigate to the signed-in destination
//!     }
//! }
//! ```

pub mod flow;
pub mod models;
pub mod service;

pub use models::{Credentials, FormState, Registration, SessionData, SessionInfo, SessionUser};
pub use service::{AuthError, AuthService, GENERIC_ERROR};
