//! Overlay hosting the profile panel without leaving the current page.

use leptos::prelude::*;

use crate::components::profile_panel::ProfilePanel;
use crate::net::types::User;
use crate::state::profile::PanelVariant;

/// Profile dialog. Backdrop click, Escape, and the close button all dismiss it.
/// A failed profile load here only notifies; it never redirects.
#[component]
pub fn ProfileModal(
    on_close: Callback<()>,
    #[prop(optional)] on_user_updated: Option<Callback<User>>,
) -> impl IntoView {
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                class="dialog dialog--profile"
                role="dialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <h2>"Your Account"</h2>
                {match on_user_updated {
                    Some(listener) => {
                        view! {
                            <ProfilePanel variant=PanelVariant::Modal on_user_updated=listener/>
                        }
                            .into_any()
                    }
                    None => view! { <ProfilePanel variant=PanelVariant::Modal/> }.into_any(),
                }}
                <div class="dialog__actions">
                    <button class="btn" on:click=on_close_click>"Close"</button>
                </div>
            </div>
        </div>
    }
}
