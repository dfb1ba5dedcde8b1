//! Shared record model for the check-in API.
//!
//! This crate owns the wire representation used by both `server` and
//! `client`. Field conventions follow the event roster CSVs the system was
//! built around: empty string means "absent" and the `here` flag is a
//! boolean-as-string ("true"/"false") computed server-side from the
//! attendance table.

use serde::{Deserialize, Serialize};

/// Error returned when parsing a [`QueueStatus`] from its wire text.
#[derive(Debug, thiserror::Error)]
#[error("invalid queue status: {0}")]
pub struct ParseStatusError(pub String);

/// Print lifecycle of a queue entry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueStatus {
    /// Waiting for a badge to be printed.
    #[default]
    Pending,
    /// Badge printed; hidden from the booth board.
    Printed,
}

impl QueueStatus {
    /// Wire/database text for this status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Printed => "printed",
        }
    }

    /// Parse a status from wire/database text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a known status.
    pub fn parse(value: &str) -> Result<Self, ParseStatusError> {
        match value {
            "pending" => Ok(Self::Pending),
            "printed" => Ok(Self::Printed),
            other => Err(ParseStatusError(other.to_owned())),
        }
    }
}

/// One entry in the badge print queue.
///
/// Created server-side on enqueue; read-only to the client. Exactly one of
/// `registration_id` / `walkin_id` is non-empty depending on `source`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueItem {
    pub queue_id: String,
    /// "registered" or "walkin".
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub registration_id: String,
    #[serde(default)]
    pub walkin_id: String,
    #[serde(default)]
    pub customer_code: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub attendee_name: String,
    #[serde(default)]
    pub status: QueueStatus,
    /// UTC ISO-8601 creation time; lexicographic order is chronological.
    #[serde(default)]
    pub created_at_iso: String,
}

/// A pre-registered attendee as served by `GET /api/registered`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredRecord {
    pub registration_id: String,
    #[serde(default)]
    pub customer_code: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub attendee_name: String,
    /// "true" once any attendance row exists for this registration.
    #[serde(default)]
    pub here: String,
}

impl RegisteredRecord {
    /// Whether the server-computed here flag is set.
    #[must_use]
    pub fn is_here(&self) -> bool {
        self.here == "true"
    }
}

/// Envelope for `GET /api/queue`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct QueueList {
    #[serde(default)]
    pub items: Vec<QueueItem>,
}

/// Envelope for `GET /api/registered`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RegisteredList {
    #[serde(default)]
    pub items: Vec<RegisteredRecord>,
}

/// Response of `POST /api/queue/add`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct QueueAdded {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub queue_id: String,
}

/// Response of `POST /api/walkins`.
///
/// `queue_id` is `None` when the walk-in was recorded without auto-enqueue.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct WalkinCreated {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub walkin_id: String,
    #[serde(default)]
    pub queue_id: Option<String>,
}

/// Current session as served by `GET /api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionInfo {
    pub username: String,
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
