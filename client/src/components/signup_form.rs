//! Registration form with a consent gate.
//!
//! The host owns account creation; this component only collects fields and
//! refuses to hand them over until both acknowledgments are checked.

use leptos::prelude::*;

use crate::state::signup::{SignupForm, SignupSubmission};

/// Blocking browser alert.
fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

#[component]
pub fn SignupFormView(on_success: Callback<SignupSubmission>) -> impl IntoView {
    let form = RwSignal::new(SignupForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(SignupForm::submit) {
            Ok(submission) => on_success.run(submission),
            Err(blocked) => alert(&blocked.to_string()),
        }
    };

    view! {
        <form class="signup-form" on:submit=on_submit>
            <label class="signup-form__label">
                "Full name"
                <input
                    class="signup-form__input"
                    type="text"
                    required
                    autocomplete="name"
                    prop:value=move || form.with(|f| f.full_name.clone())
                    on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                />
            </label>
            <label class="signup-form__label">
                "Email"
                <input
                    class="signup-form__input"
                    type="email"
                    required
                    autocomplete="email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
            </label>
            <label class="signup-form__label">
                "Password"
                <input
                    class="signup-form__input"
                    type="password"
                    required
                    autocomplete="new-password"
                    prop:value=move || form.with(|f| f.password.clone())
                    on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                />
            </label>
            <label class="signup-form__check">
                <input
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.accept_terms)
                    on:change=move |ev| form.update(|f| f.accept_terms = event_target_checked(&ev))
                />
                "I agree to the "
                <a href="/terms" target="_blank" rel="noopener noreferrer">"Terms of Service"</a>
            </label>
            <label class="signup-form__check">
                <input
                    type="checkbox"
                    prop:checked=move || form.with(|f| f.accept_privacy)
                    on:change=move |ev| {
                        form.update(|f| f.accept_privacy = event_target_checked(&ev));
                    }
                />
                "I have read the "
                <a href="/privacy" target="_blank" rel="noopener noreferrer">"Privacy Policy"</a>
            </label>
            <button class="btn btn--primary" type="submit">"Create Account"</button>
        </form>
    }
}
