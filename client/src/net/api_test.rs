use super::*;

// ===== endpoint builders =====

#[test]
fn badge_url_embeds_the_queue_id() {
    assert_eq!(badge_url("abc-123"), "/badge/abc-123");
}

#[test]
fn queue_entry_endpoint_embeds_the_queue_id() {
    assert_eq!(queue_entry_endpoint("q-9"), "/api/queue/q-9");
}

// ===== login error messages =====

#[test]
fn unauthorized_login_gets_a_friendly_message() {
    assert_eq!(login_failed_message(401), "Invalid credentials");
}

#[test]
fn other_login_failures_report_the_status() {
    assert_eq!(login_failed_message(500), "login failed: 500");
    assert_eq!(login_failed_message(503), "login failed: 503");
}
