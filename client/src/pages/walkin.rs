//! Walk-in registration page: form plus this session's submissions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav::NavBar;
use crate::net::api::WalkinSubmission;
use crate::state::auth::AuthState;
use crate::state::walkin::WalkinState;

/// Walk-in page — records a new attendee and auto-enqueues their badge.
/// The table underneath only shows rows submitted from this page visit.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn WalkinPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let walkins = expect_context::<RwSignal<WalkinState>>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_none() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let walkin_type = RwSignal::new("attendee".to_owned());
    let customer_code = RwSignal::new(String::new());
    let customer_name = RwSignal::new(String::new());
    let attendee_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let how_heard = RwSignal::new(String::new());

    let reset_form = move || {
        walkin_type.set("attendee".to_owned());
        customer_code.set(String::new());
        customer_name.set(String::new());
        attendee_name.set(String::new());
        email.set(String::new());
        phone.set(String::new());
        how_heard.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if walkins.get_untracked().submitting {
            return;
        }
        let submission = WalkinSubmission {
            walkin_type: walkin_type.get(),
            customer_code: customer_code.get(),
            customer_name: customer_name.get(),
            attendee_name: attendee_name.get(),
            email: email.get(),
            phone: phone.get(),
            how_heard: how_heard.get(),
        };
        if submission.walkin_type.is_empty()
            || submission.customer_name.trim().is_empty()
            || submission.attendee_name.trim().is_empty()
        {
            crate::net::api::alert("Type, customer name, and attendee name are required");
            return;
        }
        walkins.update(|s| s.submitting = true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::submit_walkin(&submission).await;
            match outcome {
                Some(created) if created.ok => {
                    walkins.update(|s| {
                        s.prepend(crate::state::walkin::WalkinRow {
                            walkin_id: created.walkin_id,
                            queue_id: created.queue_id,
                            walkin_type: submission.walkin_type.clone(),
                            customer_name: submission.customer_name.clone(),
                            attendee_name: submission.attendee_name.clone(),
                        });
                        s.submitting = false;
                    });
                    reset_form();
                }
                _ => {
                    walkins.update(|s| s.submitting = false);
                    crate::net::api::alert("Failed to add walk-in");
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (submission, reset_form);
            walkins.update(|s| s.submitting = false);
        }
    };

    view! {
        <div class="walkin-page">
            <NavBar/>
            <h1>"Walk-in Registration"</h1>
            <form class="walkin-form" on:submit=on_submit>
                <label class="walkin-form__label">
                    "Type"
                    <select
                        class="walkin-input"
                        prop:value=move || walkin_type.get()
                        on:change=move |ev| walkin_type.set(event_target_value(&ev))
                    >
                        <option value="attendee">"Attendee"</option>
                        <option value="exhibitor">"Exhibitor"</option>
                        <option value="press">"Press"</option>
                    </select>
                </label>
                <label class="walkin-form__label">
                    "Customer code"
                    <input
                        class="walkin-input"
                        type="text"
                        prop:value=move || customer_code.get()
                        on:input=move |ev| customer_code.set(event_target_value(&ev))
                    />
                </label>
                <label class="walkin-form__label">
                    "Customer name"
                    <input
                        class="walkin-input"
                        type="text"
                        prop:value=move || customer_name.get()
                        on:input=move |ev| customer_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="walkin-form__label">
                    "Attendee name"
                    <input
                        class="walkin-input"
                        type="text"
                        prop:value=move || attendee_name.get()
                        on:input=move |ev| attendee_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="walkin-form__label">
                    "Email"
                    <input
                        class="walkin-input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="walkin-form__label">
                    "Phone"
                    <input
                        class="walkin-input"
                        type="text"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </label>
                <label class="walkin-form__label">
                    "How did you hear about us?"
                    <input
                        class="walkin-input"
                        type="text"
                        prop:value=move || how_heard.get()
                        on:input=move |ev| how_heard.set(event_target_value(&ev))
                    />
                </label>
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || walkins.get().submitting
                >
                    "Add Walk-in"
                </button>
            </form>
            <table class="walkin-page__table">
                <thead>
                    <tr>
                        <th>"Type"</th>
                        <th>"Customer"</th>
                        <th>"Attendee"</th>
                        <th>"Badge"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        walkins
                            .get()
                            .rows
                            .into_iter()
                            .map(|row| {
                                let queue_id = row.queue_id.clone();
                                view! {
                                    <tr>
                                        <td>{row.walkin_type}</td>
                                        <td>{row.customer_name}</td>
                                        <td>{row.attendee_name}</td>
                                        <td>
                                            {queue_id
                                                .map(|id| {
                                                    view! {
                                                        <button
                                                            class="btn badge-btn"
                                                            on:click=move |_| crate::net::api::open_badge(&id)
                                                        >
                                                            "Print"
                                                        </button>
                                                    }
                                                })}
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </div>
    }
}
