use crate::config::AppConfig;
use auth_client::{flow, AuthService, FormState};
use dioxus::prelude::*;

/// Hand the webview to the provider's sign-in page.
///
/// From here on navigation belongs to the provider; the form that triggered
/// the hand-off stays locked because the page is going away.
fn redirect_to(url: &str) {
    let _ = document::eval(&format!("window.location.assign({url:?})"));
}

/// Federated sign-in button shared by both credential forms.
///
/// Shares the form's submission state, so a provider hand-off and an email
/// submission can never run at the same time.
#[component]
pub fn SocialSignInButton(form: Signal<FormState>, label: String) -> Element {
    let auth = use_context::<AuthService>();
    let config = use_context::<AppConfig>();

    rsx! {
        button {
            class: "btn-secondary",
            style: "width: 100%; padding: 12px;",
            r#type: "button",
            disabled: form().submitting,
            onclick: move |_| {
                if !form.write().begin_submit() {
                    return;
                }
                let auth = auth.clone();
                let provider = config.social_provider.clone();
                let callback = config.signed_in_path.clone();
                spawn(async move {
                    let request = auth.begin_social_login(&provider, &callback);
                    match flow::with_redirect_timeout(request, flow::REDIRECT_TIMEOUT).await {
                        Ok(url) => {
                            log::info!("handing navigation over to {}", provider);
                            redirect_to(&url);
                        }
                        Err(e) => {
                            log::warn!("federated sign-in failed: {}", e);
                            form.write().fail(e.user_message());
                        }
                    }
                });
            },
            if form().submitting {
                "⏳ Please wait…"
            } else {
                "{label}"
            }
        }
    }
}
