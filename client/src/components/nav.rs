//! Top navigation bar with station links and logout.

use leptos::prelude::*;

use crate::state::auth::AuthState;

/// Navigation bar shown on every staff page.
///
/// Links to the three stations, shows the signed-in username, and offers
/// logout. The badge view omits this bar so it prints clean.
#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let user_name = move || auth.get().user.map_or_else(String::new, |u| u.username);

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(|a| a.user = None);
                // Navigate to login via window.location for a clean state.
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/login");
                }
            });
        }
    };

    view! {
        <nav class="nav">
            <a href="/" class="nav__brand">"Frontdesk"</a>
            <a href="/booth" class="nav__link">"Booth"</a>
            <a href="/registered" class="nav__link">"Registered"</a>
            <a href="/walkin" class="nav__link">"Walk-in"</a>
            <span class="nav__spacer"></span>
            <span class="nav__user">{user_name}</span>
            <button class="btn nav__logout" on:click=on_logout>
                "Logout"
            </button>
        </nav>
    }
}
