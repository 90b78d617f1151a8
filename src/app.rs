//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, signin::SignInPage};
use crate::state::session::SessionState;

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
/// Provides the session context, installs the auth-event listener, and
/// kicks off the startup session query before routing renders.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    #[cfg(feature = "hydrate")]
    {
        // Subscribe before the initial session query so no event is missed.
        crate::net::auth_events::subscribe(move |event, payload| {
            crate::state::session::handle_auth_event(session, event, payload);
        })
        .forget();
        leptos::task::spawn_local(crate::state::session::initialize(session));
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/chartboard.css"/>
        <Title text="Chartboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=(StaticSegment("auth"), StaticSegment("signin")) view=SignInPage/>
            </Routes>
        </Router>
    }
}
