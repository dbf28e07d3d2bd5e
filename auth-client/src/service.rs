use crate::models::{Credentials, Registration, SessionData};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Fallback shown when the server rejects a request without saying why
pub const GENERIC_ERROR: &str = "Something went wrong.";

const USER_AGENT: &str = "GatehouseAuthClient/0.1.0";

/// Error type for authentication operations
#[derive(Debug, Clone, PartialEq)]
pub enum AuthError {
    NetworkError(String),
    JsonError(String),
    /// The server answered and said no; carries its message when it sent one
    Rejected { message: Option<String> },
    /// The federated redirect did not start within the bounded wait
    RedirectTimeout,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            AuthError::JsonError(msg) => write!(f, "JSON error: {}", msg),
            AuthError::Rejected { message: Some(msg) } => write!(f, "Rejected: {}", msg),
            AuthError::Rejected { message: None } => write!(f, "Rejected without a message"),
            AuthError::RedirectTimeout => write!(f, "Federated redirect timeout"),
        }
    }
}

impl std::error::Error for AuthError {}

impl AuthError {
    /// The single user-visible string for this failure.
    ///
    /// Server-supplied rejection messages surface verbatim; everything else
    /// collapses to the generic fallback. Logs keep the full variant.
    pub fn user_message(&self) -> String {
        match self {
            AuthError::Rejected {
                message: Some(message),
            } => message.clone(),
            AuthError::RedirectTimeout => {
                "The sign-in provider did not respond. Please try again.".to_string()
            }
            _ => GENERIC_ERROR.to_string(),
        }
    }
}

/// Rejection body the identity server sends with non-2xx statuses
#[derive(Debug, Deserialize)]
struct RejectionBody {
    message: Option<String>,
}

/// Answer to a social sign-in request: where to send the browser
#[derive(Debug, Deserialize)]
struct SocialRedirect {
    url: Option<String>,
}

/// Interpret a non-2xx response body as a rejection.
fn rejection(status: u16, body: &str) -> AuthError {
    let message = serde_json::from_str::<RejectionBody>(body)
        .ok()
        .and_then(|body| body.message);
    log::warn!("auth server rejection: status {}, message {:?}", status, message);
    AuthError::Rejected { message }
}

/// Client for a better-auth compatible identity server
#[derive(Debug, Clone)]
pub struct AuthService {
    base_url: String,
}

impl AuthService {
    /// Create a client for the server at `base_url`.
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/auth/{}", self.base_url.trim_end_matches('/'), path)
    }

    fn client(&self) -> Result<reqwest::Client, AuthError> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AuthError::NetworkError(format!("Client build failed: {}", e)))
    }

    async fn submit<T>(&self, path: &str, body: &T) -> Result<reqwest::Response, AuthError>
    where
        T: Serialize + ?Sized,
    {
        let response = self
            .client()?
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(|e| AuthError::NetworkError(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let text = response.text().await.unwrap_or_default();
        Err(rejection(status.as_u16(), &text))
    }

    /// Sign in with email and password. One request per call, no retry.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<(), AuthError> {
        self.submit("sign-in/email", credentials).await?;
        log::info!("signed in as {}", credentials.email);
        Ok(())
    }

    /// Create an account with email and password. One request per call, no retry.
    pub async fn sign_up(&self, registration: &Registration) -> Result<(), AuthError> {
        self.submit("sign-up/email", registration).await?;
        log::info!("account created for {}", registration.email);
        Ok(())
    }

    /// Start a federated sign-in and return the provider redirect URL.
    ///
    /// `callback_path` is where the provider sends the browser once the user
    /// has authenticated there.
    pub async fn begin_social_login(
        &self,
        provider: &str,
        callback_path: &str,
    ) -> Result<String, AuthError> {
        let body = serde_json::json!({
            "provider": provider,
            "callbackURL": callback_path,
        });
        let response = self.submit("sign-in/social", &body).await?;
        let redirect = response
            .json::<SocialRedirect>()
            .await
            .map_err(|e| AuthError::JsonError(format!("Failed to parse redirect: {}", e)))?;
        redirect
            .url
            .ok_or_else(|| AuthError::JsonError("Redirect response carried no URL".to_string()))
    }

    /// Read back the current session. `Ok(None)` means nobody is signed in.
    pub async fn session(&self) -> Result<Option<SessionData>, AuthError> {
        let response = self
            .client()?
            .get(self.endpoint("get-session"))
            .send()
            .await
            .map_err(|e| AuthError::NetworkError(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(rejection(status.as_u16(), &text));
        }
        response
            .json::<Option<SessionData>>()
            .await
            .map_err(|e| AuthError::JsonError(format!("Failed to parse session: {}", e)))
    }

    /// End the current session on the server.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.submit("sign-out", &serde_json::json!({})).await?;
        log::info!("signed out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_with_message() {
        let error = rejection(401, r#"{"message":"Invalid credentials","code":"INVALID"}"#);
        assert_eq!(
            error,
            AuthError::Rejected {
                message: Some("Invalid credentials".to_string())
            }
        );
        assert_eq!(error.user_message(), "Invalid credentials");
    }

    #[test]
    fn test_rejection_without_message_falls_back() {
        let error = rejection(422, r#"{"code":"BAD_REQUEST"}"#);
        assert_eq!(error.user_message(), GENERIC_ERROR);
    }

    #[test]
    fn test_rejection_with_unparseable_body_falls_back() {
        let error = rejection(502, "<html>Bad Gateway</html>");
        assert_eq!(error, AuthError::Rejected { message: None });
        assert_eq!(error.user_message(), GENERIC_ERROR);
    }

    #[test]
    fn test_transport_errors_collapse_to_fallback() {
        let error = AuthError::NetworkError("connection refused".to_string());
        assert_eq!(error.user_message(), GENERIC_ERROR);
    }

    #[test]
    fn test_endpoint_joining_trims_trailing_slash() {
        let service = AuthService::new("http://localhost:3000/".to_string());
        assert_eq!(
            service.endpoint("sign-in/email"),
            "http://localhost:3000/api/auth/sign-in/email"
        );
    }
}
