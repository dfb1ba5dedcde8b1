use super::*;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_single_byte() {
    assert_eq!(bytes_to_hex(&[0xff]), "ff");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// generate_token
// =============================================================================

#[test]
fn generate_token_is_64_hex_chars() {
    let token = generate_token();
    assert_eq!(token.len(), 64);
}

#[test]
fn generate_token_all_valid_hex() {
    let token = generate_token();
    assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn generate_token_two_calls_differ() {
    let a = generate_token();
    let b = generate_token();
    assert_ne!(a, b);
}

// =============================================================================
// session_ttl_hours — the helper reads one fixed key, so each case restores
// the variable before returning.
// =============================================================================

// Single test because parallel tests would race on the shared variable.
#[test]
fn session_ttl_env_handling() {
    unsafe { std::env::remove_var("SESSION_TTL_HOURS") };
    assert_eq!(session_ttl_hours(), 12);

    unsafe { std::env::set_var("SESSION_TTL_HOURS", "48") };
    assert_eq!(session_ttl_hours(), 48);

    unsafe { std::env::set_var("SESSION_TTL_HOURS", "0") };
    assert_eq!(session_ttl_hours(), 12);

    unsafe { std::env::set_var("SESSION_TTL_HOURS", "-3") };
    assert_eq!(session_ttl_hours(), 12);

    unsafe { std::env::remove_var("SESSION_TTL_HOURS") };
}

// =============================================================================
// Live-database session flow
// =============================================================================

#[cfg(feature = "live-db-tests")]
mod live {
    use super::super::*;
    use crate::state::test_helpers::integration_pool;

    #[tokio::test]
    async fn created_session_validates_and_deletes() {
        let pool = integration_pool().await;

        let token = create_session(&pool, "staff").await.expect("create session");
        let username = validate_session(&pool, &token).await.expect("validate");
        assert_eq!(username.as_deref(), Some("staff"));

        delete_session(&pool, &token).await.expect("delete");
        let gone = validate_session(&pool, &token).await.expect("validate");
        assert!(gone.is_none());
    }

    #[tokio::test]
    async fn unknown_token_does_not_validate() {
        let pool = integration_pool().await;
        let missing = validate_session(&pool, "no-such-token").await.expect("validate");
        assert!(missing.is_none());
    }
}
