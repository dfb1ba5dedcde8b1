//! Registered-roster and attendance routes.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Json;
use records::RegisteredList;

use crate::routes::auth::AuthUser;
use crate::routes::form;
use crate::services::registered::{self, RegisteredError};
use crate::state::AppState;

pub(crate) fn registered_error_to_status(err: RegisteredError) -> StatusCode {
    match err {
        RegisteredError::MissingIdColumn => StatusCode::BAD_REQUEST,
        RegisteredError::Database(_) => {
            tracing::error!(error = %err, "roster operation failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// `GET /api/registered` — the full roster with computed `here` flags.
pub async fn list_registered(State(state): State<AppState>, _auth: AuthUser) -> Result<Json<RegisteredList>, StatusCode> {
    let items = registered::list_records(&state.pool)
        .await
        .map_err(registered_error_to_status)?;
    Ok(Json(RegisteredList { items }))
}

/// `POST /api/attendance` — mark a registration as here. Idempotent.
pub async fn mark_here(
    State(state): State<AppState>,
    _auth: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let fields = form::collect_fields(&mut multipart).await?;
    let registration_id = form::required(&fields, "registration_id")?;

    registered::mark_here(&state.pool, &registration_id)
        .await
        .map_err(registered_error_to_status)?;
    Ok(Json(serde_json::json!({ "ok": true })))
}

/// `POST /api/registered/import` — seed or refresh the roster from a CSV
/// export (text body, header row first).
pub async fn import_roster(
    State(state): State<AppState>,
    _auth: AuthUser,
    body: String,
) -> Result<Json<serde_json::Value>, StatusCode> {
    let outcome = registered::import_roster(&state.pool, &body)
        .await
        .map_err(registered_error_to_status)?;

    tracing::info!(imported = outcome.imported, skipped = outcome.skipped, "roster import");
    Ok(Json(serde_json::json!({
        "ok": true,
        "imported": outcome.imported,
        "skipped": outcome.skipped,
    })))
}

#[cfg(test)]
#[path = "registered_test.rs"]
mod tests;
