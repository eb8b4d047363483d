//! Listing comparison page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads the user's scans once the session is known, lets the user pick two
//! distinct scans plus an optional question, and renders the narrative with
//! URLs turned into links. The account modal is reachable from the header.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::linked_text::LinkedText;
use crate::components::profile_modal::ProfileModal;
use crate::components::toaster::notify;
use crate::net::api::ApiClient;
use crate::net::types::{Scan, User};
use crate::state::compare::CompareState;
use crate::state::notify::{Feedback, Notifications};
use crate::util::auth::{SessionContext, install_unauth_redirect};
use crate::util::format;

#[component]
pub fn ComparePage() -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let api = expect_context::<ApiClient>();
    let notifications = expect_context::<RwSignal<Notifications>>();
    install_unauth_redirect(ctx, use_navigate());

    let state = RwSignal::new(CompareState::default());
    let show_account = RwSignal::new(false);
    let account_name = RwSignal::new(None::<String>);
    let on_user_updated = Callback::new(move |user: User| account_name.set(Some(user.full_name)));

    let requested = RwSignal::new(false);
    let api_scans = api.clone();
    Effect::new(move || {
        if requested.get_untracked() || !ctx.loaded.get() {
            return;
        }
        let Some(token) = ctx.token() else {
            return;
        };
        requested.set(true);
        account_name.set(ctx.cached_user_untracked().map(|u| u.full_name));
        state.update(CompareState::begin_load_scans);
        let api = api_scans.clone();
        leptos::task::spawn_local(async move {
            let result = api.my_scans(&token).await;
            let rejected = matches!(&result, Err(e) if e.is_unauthorized());
            if let Some(Err(feedback)) = state.try_update(|s| s.finish_load_scans(result)) {
                notify(notifications, feedback);
            }
            if rejected {
                ctx.end();
            }
        });
    });

    let on_compare = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !state.with_untracked(CompareState::can_compare) {
            return;
        }
        let Some(token) = ctx.token_untracked() else {
            return;
        };
        let request = match state.try_update(CompareState::begin_compare) {
            Some(Ok(request)) => request,
            Some(Err(invalid)) => {
                notify(notifications, Feedback::error(invalid.to_string()));
                return;
            }
            None => return,
        };
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.compare(&token, &request).await;
            let rejected = matches!(&result, Err(e) if e.is_unauthorized());
            if let Some(feedback) = state.try_update(|s| s.finish_compare(result)) {
                notify(notifications, feedback);
            }
            if rejected {
                ctx.end();
            }
        });
    };

    let busy = move || state.with(|s| s.status.is_in_flight());
    let scan_options = move |second: bool| {
        move || {
            state.with(|s| {
                let current = if second { &s.second } else { &s.first };
                s.scans.iter().map(|scan| scan_option(scan, current)).collect::<Vec<_>>()
            })
        }
    };

    view! {
        <div class="compare-page">
            <header class="toolbar">
                <span class="toolbar__title">"Compare Listings"</span>
                <span class="toolbar__spacer"></span>
                <span class="toolbar__self">{move || account_name.get().unwrap_or_default()}</span>
                <a class="btn toolbar__link" href="/profile">"Profile"</a>
                <button class="btn toolbar__account" on:click=move |_| show_account.set(true)>
                    "Account"
                </button>
            </header>

            <Show when=move || state.with(|s| s.scans_status.is_in_flight())>
                <p class="compare-page__status">"Loading scans..."</p>
            </Show>
            <Show when=move || state.with(|s| s.scans_status.error().is_some())>
                <p class="compare-page__error">
                    {move || state.with(|s| s.scans_status.error().unwrap_or_default().to_owned())}
                </p>
            </Show>

            <form class="compare-page__form" on:submit=on_compare>
                <label class="compare-page__label">
                    "First listing"
                    <select
                        class="compare-page__select"
                        prop:value=move || state.with(|s| s.first.clone())
                        on:change=move |ev| state.update(|s| s.first = event_target_value(&ev))
                    >
                        <option value="">"Select a scan"</option>
                        {scan_options(false)}
                    </select>
                </label>
                <label class="compare-page__label">
                    "Second listing"
                    <select
                        class="compare-page__select"
                        prop:value=move || state.with(|s| s.second.clone())
                        on:change=move |ev| state.update(|s| s.second = event_target_value(&ev))
                    >
                        <option value="">"Select a scan"</option>
                        {scan_options(true)}
                    </select>
                </label>
                <label class="compare-page__label">
                    "Question (optional)"
                    <textarea
                        class="compare-page__question"
                        placeholder="Which one is better for a family of four?"
                        prop:value=move || state.with(|s| s.question.clone())
                        on:input=move |ev| state.update(|s| s.question = event_target_value(&ev))
                    ></textarea>
                </label>
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || !state.with(CompareState::can_compare)
                >
                    {move || if busy() { "Comparing..." } else { "Compare" }}
                </button>
                {move || {
                    state
                        .with(|s| s.status.error().map(str::to_owned))
                        .map(|m| view! { <p class="compare-page__error">{m}</p> })
                }}
            </form>

            {move || {
                state
                    .with(|s| s.result.clone())
                    .map(|result| {
                        view! {
                            <article class="compare-page__result">
                                <h3 class="compare-page__result-title">
                                    {format::scan_label(&result.scan1)}
                                    " vs "
                                    {format::scan_label(&result.scan2)}
                                </h3>
                                <LinkedText text=result.content/>
                            </article>
                        }
                    })
            }}

            <Show when=move || show_account.get()>
                <ProfileModal
                    on_close=Callback::new(move |()| show_account.set(false))
                    on_user_updated=on_user_updated
                />
            </Show>
        </div>
    }
}

fn scan_option(scan: &Scan, selected: &str) -> AnyView {
    let is_selected = scan.id == selected;
    view! {
        <option value=scan.id.clone() selected=is_selected>
            {format::scan_label(scan)}
        </option>
    }
    .into_any()
}
