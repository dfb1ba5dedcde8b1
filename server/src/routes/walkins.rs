//! Walk-in registration route.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Json;
use records::WalkinCreated;

use crate::routes::auth::AuthUser;
use crate::routes::form;
use crate::services::walkin::{self as walkin_svc, NewWalkin, WalkinError};
use crate::state::AppState;

pub(crate) fn walkin_error_to_status(err: &WalkinError) -> StatusCode {
    tracing::error!(error = %err, "walk-in creation failed");
    StatusCode::INTERNAL_SERVER_ERROR
}

/// `POST /api/walkins` — record a walk-in; `auto_queue` (default "true")
/// also enqueues a badge for them.
pub async fn create_walkin(
    State(state): State<AppState>,
    _auth: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<WalkinCreated>, StatusCode> {
    let fields = form::collect_fields(&mut multipart).await?;
    let walkin = NewWalkin {
        walkin_type: form::required(&fields, "walkin_type")?,
        customer_code: form::optional(&fields, "customer_code"),
        customer_name: form::required(&fields, "customer_name")?,
        attendee_name: form::required(&fields, "attendee_name")?,
        email: form::optional(&fields, "email"),
        phone: form::optional(&fields, "phone"),
        how_heard: form::optional(&fields, "how_heard"),
    };
    let auto_queue = form::optional_or(&fields, "auto_queue", "true");

    let created = walkin_svc::create_walkin(&state.pool, &walkin, &auto_queue)
        .await
        .map_err(|e| walkin_error_to_status(&e))?;

    Ok(Json(WalkinCreated {
        ok: true,
        walkin_id: created.walkin_id.to_string(),
        queue_id: created.queue_id.map(|id| id.to_string()),
    }))
}
