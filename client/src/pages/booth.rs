//! Print-booth page: the live table of pending badges.
//!
//! SYSTEM CONTEXT
//! ==============
//! This screen sits on the booth laptop all day. It polls the queue on a
//! fixed period and re-renders the full table from each admitted response;
//! staleness is handled by fetch tickets, so a slow response never clobbers
//! a newer board.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav::NavBar;
use crate::state::auth::AuthState;
use crate::state::queue::QueueBoardState;

#[cfg(feature = "hydrate")]
const POLL_PERIOD: std::time::Duration = std::time::Duration::from_secs(3);

#[cfg(feature = "hydrate")]
async fn fetch_board(queue: RwSignal<QueueBoardState>) {
    let ticket = queue.try_update(|s| s.begin_fetch()).unwrap_or_default();
    if let Some(items) = crate::net::api::fetch_queue().await {
        queue.update(|s| {
            s.apply_fetch(ticket, items);
        });
    }
}

/// Booth page — polls the pending queue and offers badge + mark-printed
/// actions per row. Redirects to `/login` if the user is not authenticated.
#[component]
pub fn BoothPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let queue = expect_context::<RwSignal<QueueBoardState>>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(fetch_board(queue));
        let poll = crate::net::poll::start_polling(POLL_PERIOD, move || fetch_board(queue));
        on_cleanup(move || poll.stop());
    }

    let on_mark_printed = move |queue_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::mark_printed(&queue_id).await;
            // Refresh right away instead of waiting out the poll period.
            fetch_board(queue).await;
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = queue_id;
        }
    };

    view! {
        <div class="booth-page">
            <NavBar/>
            <h1>"Print Booth"</h1>
            <table class="booth-page__table">
                <thead>
                    <tr>
                        <th>"Customer Code"</th>
                        <th>"Customer"</th>
                        <th>"Attendee"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        queue
                            .get()
                            .items
                            .into_iter()
                            .map(|item| {
                                let badge_id = item.queue_id.clone();
                                let printed_id = item.queue_id.clone();
                                view! {
                                    <tr>
                                        <td>{item.customer_code}</td>
                                        <td>{item.customer_name}</td>
                                        <td>{item.attendee_name}</td>
                                        <td>
                                            <button
                                                class="btn badge-btn"
                                                on:click=move |_| crate::net::api::open_badge(&badge_id)
                                            >
                                                "Open Badge"
                                            </button>
                                            <button
                                                class="btn queue-btn"
                                                on:click=move |_| on_mark_printed(printed_id.clone())
                                            >
                                                "Mark Printed"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
            <Show when=move || {
                let state = queue.get();
                state.loaded && state.items.is_empty()
            }>
                <p class="booth-page__empty">"Nothing waiting to print."</p>
            </Show>
        </div>
    }
}
