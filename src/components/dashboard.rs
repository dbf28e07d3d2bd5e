use crate::session::{SessionContext, SessionState};
use crate::Screen;
use auth_client::AuthService;
use chrono::{DateTime, Local, Utc};
use dioxus::prelude::*;

fn format_expiry(expires_at: &DateTime<Utc>) -> String {
    expires_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// The authenticated landing surface, gated on the session context.
#[component]
pub fn DashboardScreen(on_navigate: EventHandler<Screen>) -> Element {
    let auth = use_context::<AuthService>();
    let session = use_context::<SessionContext>();
    let mut signing_out = use_signal(|| false);

    rsx! {
        div { style: "min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 16px; background: #f5f5f5;",
            div { class: "card", style: "width: 100%; max-width: 480px;",
                match session.state() {
                    SessionState::Unknown | SessionState::Resolving => rsx! {
                        p { style: "margin: 0; text-align: center; color: #666;",
                            "🔄 Checking your session…"
                        }
                    },
                    SessionState::Anonymous => rsx! {
                        h1 { style: "margin: 0 0 12px 0; font-size: 24px; font-weight: 700; color: #333;",
                            "Not signed in"
                        }
                        p { style: "margin: 0 0 20px 0; font-size: 14px; color: #666;",
                            "You need an account to see the dashboard."
                        }
                        button {
                            class: "btn-primary",
                            style: "width: 100%; padding: 12px;",
                            onclick: move |_| on_navigate.call(Screen::SignIn),
                            "Go to Sign In"
                        }
                    },
                    SessionState::Authenticated(data) => rsx! {
                        h1 { style: "margin: 0 0 4px 0; font-size: 24px; font-weight: 700; color: #333;",
                            "Welcome back, {data.user.name}"
                        }
                        p { style: "margin: 0 0 16px 0; font-size: 14px; color: #666;",
                            "{data.user.email}"
                        }
                        div { style: "padding: 12px; background: #e3f2fd; border-radius: 8px; color: #0066cc; font-size: 13px;",
                            "ℹ️ Session valid until {format_expiry(&data.session.expires_at)}"
                        }
                        button {
                            class: "btn-secondary",
                            style: "width: 100%; padding: 12px; margin-top: 24px;",
                            disabled: signing_out(),
                            onclick: move |_| {
                                if signing_out() {
                                    return;
                                }
                                signing_out.set(true);
                                let auth = auth.clone();
                                let mut session = session;
                                spawn(async move {
                                    session.sign_out(&auth).await;
                                    on_navigate.call(Screen::Landing);
                                });
                            },
                            if signing_out() {
                                "⏳ Signing out…"
                            } else {
                                "Sign Out"
                            }
                        }
                    },
                }
            }
        }
    }
}
