//! Sign-up route. Account creation happens in the external auth service;
//! once the consent gate passes the user is sent on to sign in there.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::components::signup_form::SignupFormView;
use crate::components::toaster::notify;
use crate::config::ClientConfig;
use crate::state::notify::{Feedback, Notifications};
use crate::state::signup::SignupSubmission;
use crate::util::auth::redirect;

/// Where to continue after registration details are accepted.
#[must_use]
pub fn continue_url(login_url: &str, email: &str) -> String {
    let sep = if login_url.contains('?') { '&' } else { '?' };
    format!("{login_url}{sep}email={}", urlencoding::encode(email))
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let notifications = expect_context::<RwSignal<Notifications>>();

    let on_success = Callback::new(move |submission: SignupSubmission| {
        log::info!("sign-up details accepted");
        notify(notifications, Feedback::success(format!("Welcome, {}!", submission.full_name)));
        redirect(&continue_url(&config.login_url, &submission.email));
    });

    view! {
        <div class="signup-page">
            <div class="signup-card">
                <h1>"Create your StayScope account"</h1>
                <SignupFormView on_success=on_success/>
                <p class="signup-card__footer">
                    "Already have an account? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
