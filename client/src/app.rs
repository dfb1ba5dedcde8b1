//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    badge::BadgePage, booth::BoothPage, dashboard::DashboardPage, login::LoginPage,
    registered::RegisteredPage, walkin::WalkinPage,
};
use crate::state::{
    auth::AuthState, queue::QueueBoardState, registered::RegisteredState, walkin::WalkinState,
};

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
/// Provides all shared state contexts, resolves the staff session once on
/// mount, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let auth = RwSignal::new(AuthState::default());
    let queue = RwSignal::new(QueueBoardState::default());
    let registered = RwSignal::new(RegisteredState::default());
    let walkins = RwSignal::new(WalkinState::default());

    provide_context(auth);
    provide_context(queue);
    provide_context(registered);
    provide_context(walkins);

    // Resolve the session cookie once; guards wait on `loading`.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        auth.update(|a| {
            a.user = user;
            a.loading = false;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/frontdesk.css"/>
        <Title text="Frontdesk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("booth") view=BoothPage/>
                <Route path=StaticSegment("registered") view=RegisteredPage/>
                <Route path=StaticSegment("walkin") view=WalkinPage/>
                <Route path=(StaticSegment("badge"), ParamSegment("queue_id")) view=BadgePage/>
            </Routes>
        </Router>
    }
}
