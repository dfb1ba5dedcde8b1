use super::*;

// =============================================================================
// auto_queue_enabled
// =============================================================================

#[test]
fn auto_queue_true_is_case_insensitive() {
    assert!(auto_queue_enabled("true"));
    assert!(auto_queue_enabled("TRUE"));
    assert!(auto_queue_enabled("True"));
}

#[test]
fn auto_queue_rejects_other_truthy_spellings() {
    assert!(!auto_queue_enabled("1"));
    assert!(!auto_queue_enabled("yes"));
    assert!(!auto_queue_enabled("on"));
    assert!(!auto_queue_enabled(" true "));
}

#[test]
fn auto_queue_rejects_false_and_empty() {
    assert!(!auto_queue_enabled("false"));
    assert!(!auto_queue_enabled(""));
}

// =============================================================================
// Live-database walk-in flow
// =============================================================================

#[cfg(feature = "live-db-tests")]
mod live {
    use super::super::*;
    use crate::services::queue;
    use crate::state::test_helpers::integration_pool;

    fn walkin(attendee: &str) -> NewWalkin {
        NewWalkin {
            walkin_type: "day-pass".to_owned(),
            customer_name: "Walkup Co".to_owned(),
            attendee_name: attendee.to_owned(),
            ..NewWalkin::default()
        }
    }

    #[tokio::test]
    async fn auto_queue_creates_a_pending_entry_tagged_walkin() {
        let pool = integration_pool().await;

        let created = create_walkin(&pool, &walkin("Auto Q"), "true").await.expect("create");
        let queue_id = created.queue_id.expect("auto-enqueued");

        let item = queue::get_entry(&pool, queue_id).await.expect("fetch");
        assert_eq!(item.source, "walkin");
        assert_eq!(item.walkin_id, created.walkin_id.to_string());
        assert_eq!(item.registration_id, "");
        assert_eq!(item.attendee_name, "Auto Q");
    }

    #[tokio::test]
    async fn without_auto_queue_no_entry_is_created() {
        let pool = integration_pool().await;

        let created = create_walkin(&pool, &walkin("No Q"), "false").await.expect("create");
        assert!(created.queue_id.is_none());

        let pending = queue::list_pending(&pool).await.expect("list");
        assert!(!pending.iter().any(|i| i.walkin_id == created.walkin_id.to_string()));
    }
}
