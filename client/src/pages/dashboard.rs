//! Station picker shown after login.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav::NavBar;
use crate::state::auth::AuthState;

/// Landing page linking to the three stations.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <div class="dashboard-page">
            <NavBar/>
            <div class="dashboard-page__stations">
                <a href="/booth" class="station-card">
                    <h2>"Print Booth"</h2>
                    <p>"Live queue of badges waiting to print"</p>
                </a>
                <a href="/registered" class="station-card">
                    <h2>"Registered"</h2>
                    <p>"Look up pre-registered attendees and check them in"</p>
                </a>
                <a href="/walkin" class="station-card">
                    <h2>"Walk-in"</h2>
                    <p>"Register a new attendee at the door"</p>
                </a>
            </div>
        </div>
    }
}
