//! Print-queue service — enqueue, pending listing, mark-printed.
//!
//! DESIGN
//! ======
//! The queue is append-mostly: rows are inserted as `pending` and flipped to
//! `printed` once a badge has been produced. The booth board only ever sees
//! pending rows in creation order; printed rows stay behind for the event
//! record. Timestamps cross the wire as the UTC ISO string the kiosk pages
//! sort on, rendered by Postgres so handlers never format dates themselves.

use records::{QueueItem, QueueStatus};
use sqlx::PgPool;
use uuid::Uuid;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum QueueError {
    #[error("queue entry not found: {0}")]
    NotFound(Uuid),
    #[error("invalid queue status in storage: {0}")]
    InvalidStatus(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Fields of a queue entry supplied by the caller; the id, status, and
/// creation time are assigned here.
#[derive(Debug, Clone, Default)]
pub struct NewQueueEntry {
    pub source: String,
    pub registration_id: String,
    pub walkin_id: String,
    pub customer_code: String,
    pub customer_name: String,
    pub attendee_name: String,
}

// Matches the Python-era `datetime.utcnow().isoformat()` wire shape:
// microsecond precision, no offset suffix.
const CREATED_AT_ISO: &str = r#"to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS.US')"#;

type QueueRow = (Uuid, String, String, String, String, String, String, String, String);

fn row_to_item(row: QueueRow) -> Result<QueueItem, QueueError> {
    let (queue_id, source, registration_id, walkin_id, customer_code, customer_name, attendee_name, status, created_at_iso) =
        row;
    let status = QueueStatus::parse(&status).map_err(|e| QueueError::InvalidStatus(e.0))?;
    Ok(QueueItem {
        queue_id: queue_id.to_string(),
        source,
        registration_id,
        walkin_id,
        customer_code,
        customer_name,
        attendee_name,
        status,
        created_at_iso,
    })
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Insert a new pending queue entry, returning its server-assigned id.
///
/// # Errors
///
/// Returns a database error if the insert fails.
pub async fn add_entry(pool: &PgPool, entry: &NewQueueEntry) -> Result<Uuid, QueueError> {
    let queue_id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO print_queue (queue_id, source, registration_id, walkin_id, customer_code, customer_name, attendee_name, status) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, 'pending')",
    )
    .bind(queue_id)
    .bind(&entry.source)
    .bind(&entry.registration_id)
    .bind(&entry.walkin_id)
    .bind(&entry.customer_code)
    .bind(&entry.customer_name)
    .bind(&entry.attendee_name)
    .execute(pool)
    .await?;
    Ok(queue_id)
}

/// List pending entries in creation order (oldest first).
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_pending(pool: &PgPool) -> Result<Vec<QueueItem>, QueueError> {
    let rows = sqlx::query_as::<_, QueueRow>(&format!(
        "SELECT queue_id, source, registration_id, walkin_id, customer_code, customer_name, attendee_name, status, {CREATED_AT_ISO} \
         FROM print_queue WHERE status = 'pending' ORDER BY created_at ASC, queue_id ASC",
    ))
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(row_to_item).collect()
}

/// Flip a pending entry to printed. A miss (unknown id, or already printed)
/// is not an error; the client re-polls and the server state wins either way.
///
/// # Errors
///
/// Returns a database error if the update fails.
pub async fn mark_printed(pool: &PgPool, queue_id: Uuid) -> Result<(), QueueError> {
    sqlx::query("UPDATE print_queue SET status = 'printed' WHERE queue_id = $1 AND status = 'pending'")
        .bind(queue_id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Fetch one entry regardless of status. Backs the badge view, which must
/// keep working after the entry has been marked printed.
///
/// # Errors
///
/// Returns [`QueueError::NotFound`] if no entry has that id, or a database
/// error if the query fails.
pub async fn get_entry(pool: &PgPool, queue_id: Uuid) -> Result<QueueItem, QueueError> {
    let row = sqlx::query_as::<_, QueueRow>(&format!(
        "SELECT queue_id, source, registration_id, walkin_id, customer_code, customer_name, attendee_name, status, {CREATED_AT_ISO} \
         FROM print_queue WHERE queue_id = $1",
    ))
    .bind(queue_id)
    .fetch_optional(pool)
    .await?
    .ok_or(QueueError::NotFound(queue_id))?;

    row_to_item(row)
}

#[cfg(test)]
#[path = "queue_test.rs"]
mod tests;
