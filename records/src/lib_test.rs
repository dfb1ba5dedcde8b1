use super::*;

fn sample_item() -> QueueItem {
    QueueItem {
        queue_id: "q-1".to_owned(),
        source: "registered".to_owned(),
        registration_id: "R100".to_owned(),
        walkin_id: String::new(),
        customer_code: "C42".to_owned(),
        customer_name: "Smith Signs".to_owned(),
        attendee_name: "Jo Smith".to_owned(),
        status: QueueStatus::Pending,
        created_at_iso: "2025-08-01T12:00:00.000000".to_owned(),
    }
}

// =============================================================================
// QueueStatus
// =============================================================================

#[test]
fn status_text_mapping_matches_wire() {
    assert_eq!(QueueStatus::Pending.as_str(), "pending");
    assert_eq!(QueueStatus::Printed.as_str(), "printed");
}

#[test]
fn status_round_trips_from_wire_text() {
    assert_eq!(QueueStatus::parse("pending").expect("status"), QueueStatus::Pending);
    assert_eq!(QueueStatus::parse("printed").expect("status"), QueueStatus::Printed);
}

#[test]
fn status_parse_rejects_unknown_text() {
    let err = QueueStatus::parse("cancelled").expect_err("status should be invalid");
    assert_eq!(err.0, "cancelled");
}

#[test]
fn status_default_is_pending() {
    assert_eq!(QueueStatus::default(), QueueStatus::Pending);
}

#[test]
fn status_serializes_lowercase() {
    let json = serde_json::to_string(&QueueStatus::Printed).expect("serialize");
    assert_eq!(json, "\"printed\"");
}

// =============================================================================
// QueueItem
// =============================================================================

#[test]
fn queue_item_serde_round_trip() {
    let item = sample_item();
    let json = serde_json::to_string(&item).expect("serialize");
    let restored: QueueItem = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(restored, item);
}

#[test]
fn queue_item_missing_optional_fields_default_to_empty() {
    let item: QueueItem = serde_json::from_str(r#"{"queue_id":"q-9"}"#).expect("deserialize");
    assert_eq!(item.queue_id, "q-9");
    assert_eq!(item.customer_code, "");
    assert_eq!(item.registration_id, "");
    assert_eq!(item.status, QueueStatus::Pending);
}

// =============================================================================
// RegisteredRecord
// =============================================================================

#[test]
fn registered_record_is_here_only_for_exact_true() {
    let mut rec: RegisteredRecord =
        serde_json::from_str(r#"{"registration_id":"R1","here":"true"}"#).expect("deserialize");
    assert!(rec.is_here());
    rec.here = "false".to_owned();
    assert!(!rec.is_here());
    rec.here = String::new();
    assert!(!rec.is_here());
}

// =============================================================================
// Envelopes — missing `items` must behave as an empty list
// =============================================================================

#[test]
fn queue_list_missing_items_defaults_to_empty() {
    let list: QueueList = serde_json::from_str("{}").expect("deserialize");
    assert!(list.items.is_empty());
}

#[test]
fn registered_list_missing_items_defaults_to_empty() {
    let list: RegisteredList = serde_json::from_str("{}").expect("deserialize");
    assert!(list.items.is_empty());
}

#[test]
fn queue_added_defaults_are_falsy() {
    let resp: QueueAdded = serde_json::from_str("{}").expect("deserialize");
    assert!(!resp.ok);
    assert!(resp.queue_id.is_empty());
}

// =============================================================================
// WalkinCreated
// =============================================================================

#[test]
fn walkin_created_parses_full_response() {
    let resp: WalkinCreated =
        serde_json::from_str(r#"{"ok":true,"walkin_id":"w-1","queue_id":"q-1"}"#).expect("deserialize");
    assert!(resp.ok);
    assert_eq!(resp.walkin_id, "w-1");
    assert_eq!(resp.queue_id.as_deref(), Some("q-1"));
}

#[test]
fn walkin_created_null_queue_id_maps_to_none() {
    let resp: WalkinCreated =
        serde_json::from_str(r#"{"ok":true,"walkin_id":"w-2","queue_id":null}"#).expect("deserialize");
    assert!(resp.ok);
    assert!(resp.queue_id.is_none());
}

#[test]
fn walkin_created_default_is_not_ok() {
    let resp = WalkinCreated::default();
    assert!(!resp.ok);
    assert!(resp.queue_id.is_none());
}
