//! Tabbed profile panel: account summary, rename, password change.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosted full-page by `ProfilePage` and inside `ProfileModal`. The panel
//! loads `/me` once the session is known, then drives each flow through the
//! `begin_*`/`finish_*` pairs on `ProfileState`. Requests are never cancelled;
//! a flow finishing after a tab switch still applies its result.

use leptos::prelude::*;

use crate::components::toaster::notify;
use crate::net::api::ApiClient;
use crate::net::types::User;
use crate::state::notify::{Feedback, Notifications};
use crate::state::profile::{OpStatus, PanelVariant, ProfileOp, ProfileState, ProfileTab};
use crate::util::auth::{LOGIN_PATH, SessionContext, redirect};
use crate::util::format;

#[component]
pub fn ProfilePanel(
    variant: PanelVariant,
    /// Called with the server's user after a successful rename.
    #[prop(optional)]
    on_user_updated: Option<Callback<User>>,
) -> impl IntoView {
    let ctx = expect_context::<SessionContext>();
    let api = expect_context::<ApiClient>();
    let notifications = expect_context::<RwSignal<Notifications>>();

    let state = RwSignal::new(ProfileState::with_cached_user(ctx.cached_user_untracked()));

    // Load the fresh user once the session has been read.
    let requested = RwSignal::new(false);
    let api_load = api.clone();
    Effect::new(move || {
        if requested.get_untracked() || !ctx.loaded.get() {
            return;
        }
        let Some(token) = ctx.token() else {
            return;
        };
        requested.set(true);
        state.update(ProfileState::begin_load);
        let api = api_load.clone();
        leptos::task::spawn_local(async move {
            let result = api.fetch_me(&token).await;
            let failure = match &result {
                Ok(user) => {
                    ctx.cache_user(user);
                    None
                }
                Err(err) => {
                    log::warn!("profile load failed (status {:?})", err.status());
                    Some(variant.on_load_failure(err))
                }
            };
            if let Some(Err(feedback)) = state.try_update(|s| s.finish_load(result)) {
                notify(notifications, feedback);
            }
            if let Some(failure) = failure {
                if failure.end_session {
                    ctx.end();
                }
                if failure.redirect_to_login {
                    redirect(LOGIN_PATH);
                }
            }
        });
    });

    let api_name = api.clone();
    let on_update_name = Callback::new(move |()| {
        if state.with_untracked(|s| s.update_name.is_in_flight()) {
            return;
        }
        let Some(token) = ctx.token_untracked() else {
            return;
        };
        let request = match state.try_update(ProfileState::begin_update_name) {
            Some(Ok(request)) => request,
            Some(Err(invalid)) => {
                notify(notifications, Feedback::error(invalid.to_string()));
                return;
            }
            None => return,
        };
        let api = api_name.clone();
        leptos::task::spawn_local(async move {
            let result = api.update_name(&token, &request).await;
            let rejected = matches!(&result, Err(e) if ProfileOp::UpdateName.ends_session(e));
            if let Ok(user) = &result {
                ctx.cache_user(user);
                if let Some(listener) = on_user_updated {
                    listener.run(user.clone());
                }
            }
            if let Some(feedback) = state.try_update(|s| s.finish_update_name(result)) {
                notify(notifications, feedback);
            }
            if rejected {
                ctx.end();
            }
        });
    });

    let api_password = api;
    let on_change_password = Callback::new(move |()| {
        if state.with_untracked(|s| s.change_password.is_in_flight()) {
            return;
        }
        let Some(token) = ctx.token_untracked() else {
            return;
        };
        let request = match state.try_update(ProfileState::begin_change_password) {
            Some(Ok(request)) => request,
            Some(Err(invalid)) => {
                notify(notifications, Feedback::error(invalid.to_string()));
                return;
            }
            None => return,
        };
        let api = api_password.clone();
        leptos::task::spawn_local(async move {
            let result = api.change_password(&token, &request).await;
            if let Some(feedback) = state.try_update(|s| s.finish_change_password(result)) {
                notify(notifications, feedback);
            }
        });
    });

    view! {
        <section class="profile-panel">
            <nav class="profile-panel__tabs" role="tablist">
                {ProfileTab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="profile-panel__tab"
                                role="tab"
                                class:profile-panel__tab--active=move || {
                                    state.with(|s| s.tab == tab)
                                }
                                on:click=move |_| state.update(|s| s.select_tab(tab))
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            {move || match state.with(|s| s.tab) {
                ProfileTab::Profile => view! { <ProfileSummary state=state/> }.into_any(),
                ProfileTab::EditName => {
                    view! { <EditNameForm state=state on_submit=on_update_name/> }.into_any()
                }
                ProfileTab::ChangePassword => {
                    view! {
                        <ChangePasswordForm state=state on_submit=on_change_password/>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn ProfileSummary(state: RwSignal<ProfileState>) -> impl IntoView {
    view! {
        <Show
            when=move || state.with(|s| s.user.is_some())
            fallback=move || {
                view! {
                    <p class="profile-panel__placeholder">
                        {move || match state.get().load {
                            OpStatus::Failed(msg) => msg,
                            _ => "Loading...".to_owned(),
                        }}
                    </p>
                }
            }
        >
            <dl class="profile-panel__summary">
                <dt>"Name"</dt>
                <dd class="profile-panel__name">{user_field(state, |u| u.full_name.clone())}</dd>
                <dt>"Email"</dt>
                <dd>
                    {user_field(state, |u| u.email.clone())}
                    <span
                        class="profile-panel__badge"
                        class:profile-panel__badge--verified=move || {
                            state.with(|s| s.user.as_ref().is_some_and(|u| u.email_verified))
                        }
                    >
                        {move || {
                            if state.with(|s| s.user.as_ref().is_some_and(|u| u.email_verified)) {
                                "Verified"
                            } else {
                                "Unverified"
                            }
                        }}
                    </span>
                </dd>
                <dt>"Plan"</dt>
                <dd>{user_field(state, |u| format::label(Some(u.plan.as_str())))}</dd>
                <dt>"Scans remaining"</dt>
                <dd>{user_field(state, |u| u.remaining_scans.to_string())}</dd>
                <dt>"Scans used"</dt>
                <dd>{user_field(state, |u| u.used_scans.to_string())}</dd>
                <dt>"Subscription"</dt>
                <dd>{user_field(state, |u| format::label(u.subscription_status.as_deref()))}</dd>
                <dt>"Member since"</dt>
                <dd>{user_field(state, |u| format::member_since(u.created_at.as_deref()))}</dd>
            </dl>
        </Show>
    }
}

/// Reactive text for one field of the loaded user.
fn user_field(
    state: RwSignal<ProfileState>,
    f: fn(&User) -> String,
) -> impl Fn() -> String + Copy + Send + Sync + 'static {
    move || state.with(|s| s.user.as_ref().map_or_else(String::new, f))
}

fn inline_error(message: Option<String>) -> Option<impl IntoView> {
    message.map(|m| view! { <p class="profile-panel__error">{m}</p> })
}

#[component]
fn EditNameForm(state: RwSignal<ProfileState>, on_submit: Callback<()>) -> impl IntoView {
    let busy = move || state.with(|s| s.update_name.is_in_flight());

    view! {
        <form
            class="profile-panel__form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <label class="profile-panel__label">
                "Full name"
                <input
                    class="profile-panel__input"
                    type="text"
                    autocomplete="name"
                    prop:value=move || state.with(|s| s.name_input.clone())
                    on:input=move |ev| state.update(|s| s.name_input = event_target_value(&ev))
                />
            </label>
            {move || inline_error(state.with(|s| s.update_name.error().map(str::to_owned)))}
            <button class="btn btn--primary" type="submit" disabled=busy>
                {move || if busy() { "Saving..." } else { "Save Name" }}
            </button>
        </form>
    }
}

#[component]
fn ChangePasswordForm(state: RwSignal<ProfileState>, on_submit: Callback<()>) -> impl IntoView {
    let busy = move || state.with(|s| s.change_password.is_in_flight());

    view! {
        <form
            class="profile-panel__form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <label class="profile-panel__label">
                "Current password"
                <input
                    class="profile-panel__input"
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || state.with(|s| s.password.current_password.clone())
                    on:input=move |ev| {
                        state.update(|s| s.password.current_password = event_target_value(&ev));
                    }
                />
            </label>
            <label class="profile-panel__label">
                "New password"
                <input
                    class="profile-panel__input"
                    type="password"
                    autocomplete="new-password"
                    prop:value=move || state.with(|s| s.password.new_password.clone())
                    on:input=move |ev| {
                        state.update(|s| s.password.new_password = event_target_value(&ev));
                    }
                />
            </label>
            <label class="profile-panel__label">
                "Confirm new password"
                <input
                    class="profile-panel__input"
                    type="password"
                    autocomplete="new-password"
                    prop:value=move || state.with(|s| s.password.confirm_password.clone())
                    on:input=move |ev| {
                        state.update(|s| s.password.confirm_password = event_target_value(&ev));
                    }
                />
            </label>
            {move || inline_error(state.with(|s| s.change_password.error().map(str::to_owned)))}
            <button class="btn btn--primary" type="submit" disabled=busy>
                {move || if busy() { "Updating..." } else { "Change Password" }}
            </button>
        </form>
    }
}
