//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::pages::{
    compare::ComparePage, login::LoginPage, profile::ProfilePage, signup::SignupPage,
};
use crate::state::notify::Notifications;
use crate::util::auth::SessionContext;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides session, notification, config, and API contexts, restores the
/// stored session once running in the browser, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_browser();
    let session = SessionContext::new();
    let notifications = RwSignal::new(Notifications::default());

    provide_context(ApiClient::new(config.api_base.clone()));
    provide_context(config);
    provide_context(session);
    provide_context(notifications);

    // Effects only run in the browser, so the server render stays signed out.
    Effect::new(move || session.restore());

    view! {
        <Stylesheet id="leptos" href="/pkg/stayscope.css"/>
        <Title text="StayScope"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/profile"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("compare") view=ComparePage/>
            </Routes>
        </Router>
        <Toaster/>
    }
}
