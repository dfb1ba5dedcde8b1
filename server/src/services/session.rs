//! Staff session management.
//!
//! DESIGN
//! ======
//! The kiosk runs under one shared staff login, so a session row carries only
//! the username it was issued for. Tokens are random hex stored server-side
//! with an expiry; validation checks `expires_at > now()` so stale rows become
//! inert without a background reaper.

use std::fmt::Write;

use rand::Rng;
use sqlx::PgPool;

const DEFAULT_SESSION_TTL_HOURS: i32 = 12;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Session lifetime, from `SESSION_TTL_HOURS` when set.
pub(crate) fn session_ttl_hours() -> i32 {
    std::env::var("SESSION_TTL_HOURS")
        .ok()
        .and_then(|v| v.parse::<i32>().ok())
        .filter(|hours| *hours > 0)
        .unwrap_or(DEFAULT_SESSION_TTL_HOURS)
}

/// Create a session for the given staff username, returning the token.
///
/// # Errors
///
/// Returns a database error if the insert fails.
pub async fn create_session(pool: &PgPool, username: &str) -> Result<String, sqlx::Error> {
    let token = generate_token();
    sqlx::query("INSERT INTO sessions (token, username, expires_at) VALUES ($1, $2, now() + make_interval(hours => $3))")
        .bind(&token)
        .bind(username)
        .bind(session_ttl_hours())
        .execute(pool)
        .await?;
    Ok(token)
}

/// Validate a session token, returning the username it was issued for.
///
/// # Errors
///
/// Returns a database error if the lookup fails.
pub async fn validate_session(pool: &PgPool, token: &str) -> Result<Option<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>("SELECT username FROM sessions WHERE token = $1 AND expires_at > now()")
        .bind(token)
        .fetch_optional(pool)
        .await
}

/// Delete a session by token.
///
/// # Errors
///
/// Returns a database error if the delete fails.
pub async fn delete_session(pool: &PgPool, token: &str) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM sessions WHERE token = $1")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
