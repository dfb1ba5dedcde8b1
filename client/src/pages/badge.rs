//! Printable badge view for one queue entry.
//!
//! Opened in its own tab from the booth, registered, and walk-in pages, so
//! it carries no navigation chrome. Any queue entry renders here regardless
//! of print status.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};
use records::QueueItem;

use crate::state::auth::AuthState;

#[component]
pub fn BadgePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let entry = RwSignal::new(None::<QueueItem>);
    let loaded = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let queue_id = params.get_untracked().get("queue_id").unwrap_or_default();
        leptos::task::spawn_local(async move {
            entry.set(crate::net::api::fetch_queue_entry(&queue_id).await);
            loaded.set(true);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = params;
    }

    let on_print = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.print();
            }
        }
    };

    view! {
        <div class="badge-page">
            <Show
                when=move || entry.get().is_some()
                fallback=move || {
                    view! {
                        <Show when=move || loaded.get()>
                            <p class="badge-page__missing">"Badge not found"</p>
                        </Show>
                    }
                }
            >
                {move || {
                    entry
                        .get()
                        .map(|item| {
                            view! {
                                <div class="badge-card">
                                    <p class="badge-card__customer-code">{item.customer_code}</p>
                                    <h1 class="badge-card__attendee">{item.attendee_name}</h1>
                                    <p class="badge-card__customer">{item.customer_name}</p>
                                </div>
                                <button class="btn btn--primary badge-page__print" on:click=on_print>
                                    "Print"
                                </button>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
