//! Login hand-off route.
//!
//! Tokens are issued by the external auth service, which sends the browser
//! back to `/login?token=...`. This page stores that token as the session and
//! continues to the profile. Without a token it links out to sign in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::config::ClientConfig;
use crate::state::session::Session;
use crate::util::auth::{LOGIN_PATH, SessionContext, redirect};

pub const AFTER_LOGIN_PATH: &str = "/profile";

/// Accept a non-blank token from the query string.
#[must_use]
pub fn token_from_query(raw: Option<String>) -> Option<String> {
    raw.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty())
}

/// Whether the configured sign-in URL leads somewhere other than this page.
#[must_use]
pub fn has_external_login(login_url: &str) -> bool {
    let path = login_url.split(['?', '#']).next().unwrap_or_default();
    !login_url.trim().is_empty() && path != LOGIN_PATH
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let config = expect_context::<ClientConfig>();
    let query = use_query_map();

    Effect::new(move || {
        if let Some(token) = token_from_query(query.with(|q| q.get("token"))) {
            ctx.sign_in(Session::new(token));
            log::info!("session stored from login hand-off");
            redirect(AFTER_LOGIN_PATH);
        } else if ctx.loaded.get() && ctx.session.with(Option::is_some) {
            redirect(AFTER_LOGIN_PATH);
        }
    });

    let external = has_external_login(&config.login_url);
    let login_url = config.login_url;

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"StayScope"</h1>
                <p class="login-card__subtitle">"Vacation rental insights"</p>
                {if external {
                    view! {
                        <a href=login_url class="login-button">
                            "Sign in"
                        </a>
                    }
                        .into_any()
                } else {
                    view! {
                        <p class="login-message">
                            "Sign in from the StayScope home page to continue."
                        </p>
                    }
                        .into_any()
                }}
                <div class="login-divider"></div>
                <p class="login-card__subtitle">
                    "New here? " <a href="/signup">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}
