use crate::components::social::SocialSignInButton;
use crate::Screen;
use auth_client::{flow, AuthService, Credentials, FormState};
use dioxus::prelude::*;

#[component]
pub fn SignInScreen(on_navigate: EventHandler<Screen>) -> Element {
    let auth = use_context::<AuthService>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut form = use_signal(FormState::idle);

    let mut handle_submit = move || {
        let email_value = email().trim().to_string();
        let password_value = password();
        if email_value.is_empty() || password_value.is_empty() {
            form.write().fail("Email and password are required.");
            return;
        }
        if !form.write().begin_submit() {
            return;
        }

        let auth = auth.clone();
        spawn(async move {
            let credentials = Credentials {
                email: email_value,
                password: password_value,
            };
            let outcome = auth.sign_in(&credentials).await;
            if flow::resolve_submission(&mut *form.write(), outcome) {
                on_navigate.call(Screen::Dashboard);
            }
        });
    };

    rsx! {
        div { style: "min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 16px; background: #f5f5f5;",
            div { class: "card", style: "width: 100%; max-width: 420px;",
                h1 { style: "margin: 0 0 4px 0; font-size: 24px; font-weight: 700; color: #333;",
                    "Welcome Back"
                }
                p { style: "margin: 0 0 20px 0; font-size: 14px; color: #666;",
                    "Enter your credentials to access your account"
                }

                if let Some(message) = form().error {
                    div { style: "background: #fee; border: 1px solid #fcc; color: #c33; padding: 12px; margin-bottom: 16px; border-radius: 8px; font-size: 14px;",
                        "⚠️ {message}"
                    }
                }

                div { style: "margin-bottom: 16px;",
                    input {
                        r#type: "email",
                        class: "input",
                        placeholder: "Email",
                        required: true,
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                        autofocus: true,
                    }
                }
                div { style: "margin-bottom: 20px;",
                    input {
                        r#type: "password",
                        class: "input",
                        placeholder: "Password",
                        required: true,
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                }

                button {
                    class: "btn-primary",
                    style: "width: 100%; padding: 12px;",
                    disabled: form().submitting,
                    onclick: move |_| handle_submit(),
                    if form().submitting {
                        "⏳ Signing in…"
                    } else {
                        "Sign In"
                    }
                }

                div { style: "display: flex; align-items: center; gap: 8px; margin: 16px 0;",
                    div { style: "flex: 1; border-top: 1px solid #ddd;" }
                    span { style: "font-size: 12px; color: #888; text-transform: uppercase;",
                        "Or continue with"
                    }
                    div { style: "flex: 1; border-top: 1px solid #ddd;" }
                }

                SocialSignInButton { form, label: "Sign in with Google" }

                p { style: "margin: 20px 0 0 0; text-align: center; font-size: 14px; color: #666;",
                    "Don't have an account? "
                    button {
                        class: "btn-link",
                        onclick: move |_| on_navigate.call(Screen::SignUp),
                        "Sign Up"
                    }
                }
            }
        }
    }
}
