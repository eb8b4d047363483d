//! Toast stack for the notification channel.

use leptos::prelude::*;

use crate::state::notify::{Feedback, NoticeKind, Notifications};

#[cfg(feature = "hydrate")]
const AUTO_DISMISS_MS: u32 = 4_000;

/// Queue `feedback` and schedule its removal.
pub fn notify(notifications: RwSignal<Notifications>, feedback: Feedback) {
    let Some(id) = notifications.try_update(|n| n.push(feedback)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
        let _ = notifications.try_update(|n| n.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Renders queued notices; clicking one dismisses it early.
#[component]
pub fn Toaster() -> impl IntoView {
    let notifications = expect_context::<RwSignal<Notifications>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            {move || {
                notifications
                    .get()
                    .items
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        let is_error = notice.kind == NoticeKind::Error;
                        view! {
                            <div
                                class="toast"
                                class:toast--success=!is_error
                                class:toast--error=is_error
                                on:click=move |_| notifications.update(|n| n.dismiss(id))
                            >
                                <span class="toast__icon">
                                    {if is_error { "✕" } else { "✓" }}
                                </span>
                                <span class="toast__text">{notice.text}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
