use crate::components::social::SocialSignInButton;
use crate::Screen;
use auth_client::{flow, AuthService, FormState, Registration};
use dioxus::prelude::*;

const MIN_PASSWORD_LEN: usize = 8;

#[component]
pub fn SignUpScreen(on_navigate: EventHandler<Screen>) -> Element {
    let auth = use_context::<AuthService>();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut age = use_signal(String::new);
    let mut form = use_signal(FormState::idle);

    let mut handle_submit = move || {
        let name_value = name().trim().to_string();
        let email_value = email().trim().to_string();
        let password_value = password();
        if name_value.is_empty() || email_value.is_empty() || password_value.is_empty() {
            form.write().fail("Name, email and password are required.");
            return;
        }
        // checked here so an under-length password never reaches the server
        if password_value.chars().count() < MIN_PASSWORD_LEN {
            form.write()
                .fail("Password must be at least 8 characters long.");
            return;
        }
        if !form.write().begin_submit() {
            return;
        }

        let auth = auth.clone();
        let age_value = age();
        spawn(async move {
            let registration = Registration::new(name_value, email_value, password_value, &age_value);
            let outcome = auth.sign_up(&registration).await;
            if flow::resolve_submission(&mut *form.write(), outcome) {
                on_navigate.call(Screen::Dashboard);
            }
        });
    };

    rsx! {
        div { style: "min-height: 100vh; display: flex; align-items: center; justify-content: center; padding: 16px; background: #f5f5f5;",
            div { class: "card", style: "width: 100%; max-width: 420px;",
                h1 { style: "margin: 0 0 4px 0; font-size: 24px; font-weight: 700; color: #333;",
                    "Create an Account"
                }
                p { style: "margin: 0 0 20px 0; font-size: 14px; color: #666;",
                    "Enter your details below to create your account"
                }

                if let Some(message) = form().error {
                    div { style: "background: #fee; border: 1px solid #fcc; color: #c33; padding: 12px; margin-bottom: 16px; border-radius: 8px; font-size: 14px;",
                        "⚠️ {message}"
                    }
                }

                div { style: "margin-bottom: 16px;",
                    input {
                        r#type: "text",
                        class: "input",
                        placeholder: "Full Name",
                        required: true,
                        value: "{name}",
                        oninput: move |e| name.set(e.value()),
                        autofocus: true,
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
                    }
                }
                div { style: "margin-bottom: 16px;",
                    input {
                        r#type: "password",
                        class: "input",
                        placeholder: "Password",
                        required: true,
                        minlength: 8,
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                }
                div { style: "margin-bottom: 20px;",
                    input {
                        r#type: "number",
                        class: "input",
                        placeholder: "Age (optional)",
                        value: "{age}",
                        oninput: move |e| age.set(e.value()),
                    }
                }

                button {
                    class: "btn-primary",
                    style: "width: 100%; padding: 12px;",
                    disabled: form().submitting,
                    onclick: move |_| handle_submit(),
                    if form().submitting {
                        "⏳ Creating account…"
                    } else {
                        "Create Account"
                    }
                }

                div { style: "display: flex; align-items: center; gap: 8px; margin: 16px 0;",
                    div { style: "flex: 1; border-top: 1px solid #ddd;" }
                    span { style: "font-size: 12px; color: #888; text-transform: uppercase;",
                        "Or continue with"
                    }
                    div { style: "flex: 1; border-top: 1px solid #ddd;" }
                }

                SocialSignInButton { form, label: "Sign up with Google" }

                p { style: "margin: 20px 0 0 0; text-align: center; font-size: 14px; color: #666;",
                    "Already have an account? "
                    button {
                        class: "btn-link",
                        onclick: move |_| on_navigate.call(Screen::SignIn),
                        "Sign In"
                    }
                }
            }
        }
    }
}
