use crate::Screen;
use dioxus::prelude::*;

#[component]
pub fn LandingScreen(on_navigate: EventHandler<Screen>) -> Element {
    rsx! {
        div { style: "min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; padding: 16px; text-align: center; background: #f5f5f5;",
            h1 { style: "color: #0066cc; font-size: 44px; font-weight: 700; margin: 0 0 16px 0;",
                "🔐 Gatehouse"
            }
            p { style: "font-size: 18px; color: #555; max-width: 480px; margin: 0 0 32px 0;",
                "A secure, modern sign-in experience for your next project."
            }
            div { style: "display: flex; gap: 12px;",
                button {
                    class: "btn-primary",
                    style: "padding: 14px 28px; font-size: 16px;",
                    onclick: move |_| on_navigate.call(Screen::SignUp),
                    "Get Started"
                }
                button {
                    class: "btn-secondary",
                    style: "padding: 14px 28px; font-size: 16px;",
                    onclick: move |_| on_navigate.call(Screen::SignIn),
                    "Sign In"
                }
            }
        }
    }
}
