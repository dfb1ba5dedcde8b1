//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`; mutating calls
//! post browser `FormData` so the server sees ordinary multipart forms.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics. Most failures
//! are silently absorbed (the kiosk operator notices a table not moving);
//! only login and walk-in submission surface errors.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use records::{QueueItem, RegisteredRecord, SessionInfo, WalkinCreated};

#[cfg(any(test, feature = "hydrate"))]
fn queue_entry_endpoint(queue_id: &str) -> String {
    format!("/api/queue/{queue_id}")
}

/// URL of the printable badge view for one queue entry.
#[must_use]
pub fn badge_url(queue_id: &str) -> String {
    format!("/badge/{queue_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    if status == 401 {
        "Invalid credentials".to_owned()
    } else {
        format!("login failed: {status}")
    }
}

// =============================================================================
// FORM-DATA PLUMBING
// =============================================================================

#[cfg(feature = "hydrate")]
fn build_form(pairs: &[(&str, &str)]) -> Option<web_sys::FormData> {
    let form = web_sys::FormData::new().ok()?;
    for (name, value) in pairs {
        form.append_with_str(name, value).ok()?;
    }
    Some(form)
}

#[cfg(feature = "hydrate")]
async fn post_form(url: &str, pairs: &[(&str, &str)]) -> Option<gloo_net::http::Response> {
    let form = build_form(pairs)?;
    gloo_net::http::Request::post(url)
        .body(form)
        .ok()?
        .send()
        .await
        .ok()
}

// =============================================================================
// AUTH
// =============================================================================

/// Fetch the current staff session from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<SessionInfo> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SessionInfo>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns "Invalid credentials" on 401, a status message for other
/// failures, or the transport error text.
pub async fn login(username: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&serde_json::json!({ "username": username, "password": password }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err("not available on server".to_owned())
    }
}

/// Log out the current session by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

// =============================================================================
// QUEUE
// =============================================================================

/// Fetch pending queue entries. `None` on any failure; the booth poll just
/// keeps the previous render.
pub async fn fetch_queue() -> Option<Vec<QueueItem>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/queue").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        let list = resp.json::<records::QueueList>().await.ok()?;
        Some(list.items)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Post a mark-printed for one entry. Fire-and-forget: the follow-up poll
/// shows whether the server removed it.
pub async fn mark_printed(queue_id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let _ = post_form("/api/queue/mark_printed", &[("queue_id", queue_id)]).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = queue_id;
    }
}

/// Enqueue a badge for a registered attendee, returning the new queue id.
pub async fn add_registered_to_queue(record: &RegisteredRecord) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_form(
            "/api/queue/add",
            &[
                ("source", "registered"),
                ("registration_id", &record.registration_id),
                ("walkin_id", ""),
                ("customer_code", &record.customer_code),
                ("customer_name", &record.customer_name),
                ("attendee_name", &record.attendee_name),
            ],
        )
        .await?;
        if !resp.ok() {
            return None;
        }
        let body = resp.json::<records::QueueAdded>().await.ok()?;
        if body.queue_id.is_empty() { None } else { Some(body.queue_id) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = record;
        None
    }
}

/// Fetch one queue entry (any status) for the badge view.
pub async fn fetch_queue_entry(queue_id: &str) -> Option<QueueItem> {
    #[cfg(feature = "hydrate")]
    {
        let url = queue_entry_endpoint(queue_id);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<QueueItem>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = queue_id;
        None
    }
}

// =============================================================================
// REGISTERED
// =============================================================================

/// Fetch the registered roster snapshot.
pub async fn fetch_registered() -> Option<Vec<RegisteredRecord>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/registered")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let list = resp.json::<records::RegisteredList>().await.ok()?;
        Some(list.items)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Mark a registration as here. Returns whether the server accepted it.
pub async fn mark_here(registration_id: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        match post_form("/api/attendance", &[("registration_id", registration_id)]).await {
            Some(resp) => resp.ok(),
            None => false,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = registration_id;
        false
    }
}

// =============================================================================
// WALK-INS
// =============================================================================

/// Form fields of a walk-in submission.
#[derive(Clone, Debug, Default)]
pub struct WalkinSubmission {
    pub walkin_type: String,
    pub customer_code: String,
    pub customer_name: String,
    pub attendee_name: String,
    pub email: String,
    pub phone: String,
    pub how_heard: String,
}

/// Submit a walk-in with auto-enqueue. `None` means the request itself
/// failed; callers treat that the same as an `ok:false` response.
pub async fn submit_walkin(submission: &WalkinSubmission) -> Option<WalkinCreated> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_form(
            "/api/walkins",
            &[
                ("walkin_type", &submission.walkin_type),
                ("customer_code", &submission.customer_code),
                ("customer_name", &submission.customer_name),
                ("attendee_name", &submission.attendee_name),
                ("email", &submission.email),
                ("phone", &submission.phone),
                ("how_heard", &submission.how_heard),
                ("auto_queue", "true"),
            ],
        )
        .await?;
        if !resp.ok() {
            return None;
        }
        resp.json::<WalkinCreated>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = submission;
        None
    }
}

// =============================================================================
// BROWSER GLUE
// =============================================================================

/// Open the badge view for a queue entry in a new tab.
pub fn open_badge(queue_id: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(&badge_url(queue_id), "_blank");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = queue_id;
    }
}

/// Blocking alert, used only by the walk-in failure path.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}
