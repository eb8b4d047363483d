//! Plain text with bare URLs rendered as links.

use leptos::prelude::*;

use crate::util::linkify::{Segment, segments};

#[component]
pub fn LinkedText(#[prop(into)] text: String) -> impl IntoView {
    let parts = segments(&text)
        .into_iter()
        .map(|segment| match segment {
            Segment::Text(t) => view! { <span>{t.to_owned()}</span> }.into_any(),
            Segment::Link(url) => {
                let href = url.to_owned();
                view! {
                    <a href=href target="_blank" rel="noopener noreferrer">
                        {url.to_owned()}
                    </a>
                }
                .into_any()
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="linked-text">{parts}</div> }
}
