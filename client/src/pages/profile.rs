//! Full-page profile route.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::profile_panel::ProfilePanel;
use crate::state::profile::PanelVariant;
use crate::util::auth::{LOGIN_PATH, SessionContext, install_unauth_redirect, redirect};

/// Profile page. Redirects to `/login` when no session is stored.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    install_unauth_redirect(ctx, use_navigate());

    let on_logout = move |_| {
        ctx.end();
        redirect(LOGIN_PATH);
    };

    view! {
        <div class="profile-page">
            <header class="toolbar">
                <span class="toolbar__title">"Account"</span>
                <span class="toolbar__spacer"></span>
                <a class="btn toolbar__link" href="/compare">"Compare Listings"</a>
                <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>
            <Show
                when=move || ctx.loaded.get() && ctx.session.with(Option::is_some)
                fallback=move || view! { <p class="profile-page__status">"Loading..."</p> }
            >
                <ProfilePanel variant=PanelVariant::Page/>
            </Show>
        </div>
    }
}
