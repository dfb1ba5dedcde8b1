//! Print-queue routes.

use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use records::{QueueItem, QueueList};
use uuid::Uuid;

use crate::routes::auth::AuthUser;
use crate::routes::form;
use crate::services::queue::{self, NewQueueEntry, QueueError};
use crate::state::AppState;

pub(crate) fn queue_error_to_status(err: QueueError) -> StatusCode {
    match err {
        QueueError::NotFound(_) => StatusCode::NOT_FOUND,
        QueueError::InvalidStatus(_) | QueueError::Database(_) => {
            tracing::error!(error = %err, "queue operation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// `GET /api/queue` — pending entries, oldest first.
pub async fn list_queue(State(state): State<AppState>, _auth: AuthUser) -> Result<Json<QueueList>, StatusCode> {
    let items = queue::list_pending(&state.pool)
        .await
        .map_err(queue_error_to_status)?;
    Ok(Json(QueueList { items }))
}

/// `POST /api/queue/mark_printed` — flip one pending entry to printed.
///
/// Always answers `{ok:true}`: an id that is unknown, malformed, or already
/// printed leaves the queue unchanged and the next poll shows the truth.
pub async fn mark_printed(
    State(state): State<AppState>,
    _auth: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let fields = form::collect_fields(&mut multipart).await?;
    let queue_id = form::required(&fields, "queue_id")?;

    if let Ok(queue_id) = Uuid::parse_str(&queue_id) {
        queue::mark_printed(&state.pool, queue_id)
            .await
            .map_err(queue_error_to_status)?;
    }
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// `POST /api/queue/add` — enqueue a badge for a registered attendee or a
/// walk-in.
pub async fn add_to_queue(
    State(state): State<AppState>,
    _auth: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let fields = form::collect_fields(&mut multipart).await?;
    let entry = NewQueueEntry {
        source: form::required(&fields, "source")?,
        registration_id: form::optional(&fields, "registration_id"),
        walkin_id: form::optional(&fields, "walkin_id"),
        customer_code: form::optional(&fields, "customer_code"),
        customer_name: form::required(&fields, "customer_name")?,
        attendee_name: form::required(&fields, "attendee_name")?,
    };

    let queue_id = queue::add_entry(&state.pool, &entry)
        .await
        .map_err(queue_error_to_status)?;
    Ok(Json(serde_json::json!({ "ok": true, "queue_id": queue_id })))
}

/// `GET /api/queue/{queue_id}` — one entry regardless of status; backs the
/// badge view.
pub async fn get_queue_entry(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(queue_id): Path<String>,
) -> Result<Json<QueueItem>, StatusCode> {
    // Malformed ids 404 like unknown ones; badge links are user-visible URLs.
    let queue_id = Uuid::parse_str(&queue_id).map_err(|_| StatusCode::NOT_FOUND)?;
    let item = queue::get_entry(&state.pool, queue_id)
        .await
        .map_err(queue_error_to_status)?;
    Ok(Json(item))
}

#[cfg(test)]
#[path = "queue_test.rs"]
mod tests;
