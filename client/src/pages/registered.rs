//! Registered-attendee lookup page with filters, check-in, and badge print.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use records::RegisteredRecord;

use crate::components::nav::NavBar;
use crate::state::auth::AuthState;
use crate::state::registered::RegisteredState;

/// Registered page — filterable roster table with Here and Print actions.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn RegisteredPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let registered = expect_context::<RwSignal<RegisteredState>>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    // One snapshot per visit; filters rework it locally without re-fetching.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        if let Some(records) = crate::net::api::fetch_registered().await {
            registered.update(|s| s.apply_fetch(records));
        }
    });

    let on_mark_here = move |registration_id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if crate::net::api::mark_here(&registration_id).await {
                registered.update(|s| s.mark_here(&registration_id));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = registration_id;
        }
    };

    let on_print = move |record: RegisteredRecord| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Some(queue_id) = crate::net::api::add_registered_to_queue(&record).await {
                crate::net::api::open_badge(&queue_id);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = record;
        }
    };

    view! {
        <div class="registered-page">
            <NavBar/>
            <h1>"Registered Attendees"</h1>
            <div class="registered-page__filters">
                <input
                    class="filter-input"
                    type="text"
                    placeholder="Customer code"
                    prop:value=move || registered.get().filters.customer_code
                    on:input=move |ev| {
                        registered.update(|s| s.filters.customer_code = event_target_value(&ev));
                    }
                />
                <input
                    class="filter-input"
                    type="text"
                    placeholder="Customer name"
                    prop:value=move || registered.get().filters.customer_name
                    on:input=move |ev| {
                        registered.update(|s| s.filters.customer_name = event_target_value(&ev));
                    }
                />
                <input
                    class="filter-input"
                    type="text"
                    placeholder="Attendee name"
                    prop:value=move || registered.get().filters.attendee_name
                    on:input=move |ev| {
                        registered.update(|s| s.filters.attendee_name = event_target_value(&ev));
                    }
                />
                <input
                    class="filter-input"
                    type="text"
                    placeholder="Registration ID"
                    prop:value=move || registered.get().filters.registration_id
                    on:input=move |ev| {
                        registered.update(|s| s.filters.registration_id = event_target_value(&ev));
                    }
                />
                <button class="btn" on:click=move |_| registered.update(RegisteredState::clear_filters)>
                    "Clear Filters"
                </button>
            </div>
            <table class="registered-page__table">
                <thead>
                    <tr>
                        <th>"Customer Code"</th>
                        <th>"Customer"</th>
                        <th>"Attendee"</th>
                        <th>"Registration ID"</th>
                        <th>"Here"</th>
                        <th>"Badge"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let state = registered.get();
                        state
                            .visible()
                            .into_iter()
                            .map(|record| {
                                let here = state.is_here(&record);
                                let here_id = record.registration_id.clone();
                                let print_record = record.clone();
                                view! {
                                    <tr>
                                        <td>{record.customer_code.clone()}</td>
                                        <td>{record.customer_name.clone()}</td>
                                        <td>{record.attendee_name.clone()}</td>
                                        <td>{record.registration_id.clone()}</td>
                                        <td>
                                            <button
                                                class="here-btn"
                                                class=("here-btn--active", here)
                                                disabled=here
                                                on:click=move |_| on_mark_here(here_id.clone())
                                            >
                                                "Here"
                                            </button>
                                        </td>
                                        <td>
                                            <button
                                                class="btn badge-btn"
                                                on:click=move |_| on_print(print_record.clone())
                                            >
                                                "Print"
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
                let state = registered.get();
                state.loaded && state.visible().is_empty()
            }>
                <p class="registered-page__empty">"No matching registrations."</p>
            </Show>
        </div>
    }
}
