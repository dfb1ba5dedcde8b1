//! Walk-in service — on-site registration with optional auto-enqueue.
//!
//! TRADE-OFFS
//! ==========
//! The walk-in insert and the queue insert are deliberately sequential, not a
//! transaction: a walk-in that fails to enqueue is still a recorded attendee,
//! and the desk retries the print from the booth board instead of re-entering
//! the person.

use sqlx::PgPool;
use uuid::Uuid;

use super::queue::{self, NewQueueEntry, QueueError};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum WalkinError {
    #[error("enqueue failed: {0}")]
    Enqueue(#[from] QueueError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Form fields of a walk-in registration.
#[derive(Debug, Clone, Default)]
pub struct NewWalkin {
    pub walkin_type: String,
    pub customer_code: String,
    pub customer_name: String,
    pub attendee_name: String,
    pub email: String,
    pub phone: String,
    pub how_heard: String,
}

/// Result of creating a walk-in; `queue_id` is set only when auto-enqueue
/// was requested.
#[derive(Debug, Clone)]
pub struct CreatedWalkin {
    pub walkin_id: Uuid,
    pub queue_id: Option<Uuid>,
}

/// The flag is truthy only for the exact case-insensitive string "true".
#[must_use]
pub(crate) fn auto_queue_enabled(value: &str) -> bool {
    value.to_lowercase() == "true"
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Record a walk-in, then enqueue a badge for them when `auto_queue` asks
/// for it.
///
/// # Errors
///
/// Returns a database error if either insert fails. The walk-in row survives
/// a failed enqueue.
pub async fn create_walkin(pool: &PgPool, walkin: &NewWalkin, auto_queue: &str) -> Result<CreatedWalkin, WalkinError> {
    let walkin_id = Uuid::new_v4();
    sqlx::query(
        "INSERT INTO walkins (walkin_id, walkin_type, customer_code, customer_name, attendee_name, email, phone, how_heard) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
    )
    .bind(walkin_id)
    .bind(&walkin.walkin_type)
    .bind(&walkin.customer_code)
    .bind(&walkin.customer_name)
    .bind(&walkin.attendee_name)
    .bind(&walkin.email)
    .bind(&walkin.phone)
    .bind(&walkin.how_heard)
    .execute(pool)
    .await?;

    let queue_id = if auto_queue_enabled(auto_queue) {
        let entry = NewQueueEntry {
            source: "walkin".to_owned(),
            registration_id: String::new(),
            walkin_id: walkin_id.to_string(),
            customer_code: walkin.customer_code.clone(),
            customer_name: walkin.customer_name.clone(),
            attendee_name: walkin.attendee_name.clone(),
        };
        Some(queue::add_entry(pool, &entry).await?)
    } else {
        None
    };

    Ok(CreatedWalkin { walkin_id, queue_id })
}

#[cfg(test)]
#[path = "walkin_test.rs"]
mod tests;
