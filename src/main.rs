use auth_client::AuthService;
use dioxus::prelude::*;

mod components;
mod config;
mod session;

use components::{DashboardScreen, LandingScreen, SignInScreen, SignUpScreen};
use session::SessionContext;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    env_logger::init();
    dioxus::launch(App);
}

/// Screen navigation for the app
#[derive(Clone, PartialEq, Debug)]
pub enum Screen {
    Landing,
    SignIn,
    SignUp,
    Dashboard,
}

#[component]
fn App() -> Element {
    let config = use_context_provider(config::AppConfig::load);
    let auth = use_context_provider(|| AuthService::new(config.auth_server_url.clone()));
    let mut session = SessionContext::provide();
    let mut current_screen = use_signal(|| Screen::Landing);

    // Resolve the session once on app start
    use_effect(move || {
        let auth = auth.clone();
        spawn(async move {
            session.refresh(&auth).await;
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { style: "display: flex; flex-direction: column; height: 100vh; font-family: sans-serif;",

            div { style: "flex: 1; overflow-y: auto;",
                match current_screen() {
                    Screen::Landing => rsx! {
                        LandingScreen { on_navigate: move |s| current_screen.set(s) }
                    },
                    Screen::SignIn => rsx! {
                        SignInScreen { on_navigate: move |s| current_screen.set(s) }
                    },
                    Screen::SignUp => rsx! {
                        SignUpScreen { on_navigate: move |s| current_screen.set(s) }
                    },
                    Screen::Dashboard => rsx! {
                        DashboardScreen { on_navigate: move |s| current_screen.set(s) }
                    },
                }
            }
        }
    }
}
