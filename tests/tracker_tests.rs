// Integration tests for the visitor tracker and stats reader contracts.

mod common;

use portfolio_actix::portfolio::enums::contact_error::ContactError;
use portfolio_actix::portfolio::enums::tracking_error::TrackingError;
use portfolio_actix::portfolio::structs::visit_event::VisitEvent;

#[tokio::test]
async fn test_track_visit_returns_true_with_store() {
    let (tracker, _temp_dir) = common::create_test_tracker().await;

    assert!(tracker.track_visit(common::test_visit("/")).await);
    assert_eq!(tracker.get_stats().visits_tracked, 1);
}

#[tokio::test]
async fn test_track_visit_substitutes_unknown_and_still_tracks() {
    let (tracker, _temp_dir) = common::create_test_tracker().await;

    let event = VisitEvent::from_parts(None, None, "/");
    assert!(tracker.track_visit(event).await);

    let recent = tracker.recent_visits().await.unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].origin_address, "unknown");
    assert_eq!(recent[0].client_signature, "unknown");
}

#[tokio::test]
async fn test_track_visit_returns_false_without_store() {
    let tracker = common::create_degraded_tracker().await;

    assert!(!tracker.track_visit(common::test_visit("/")).await);
    assert_eq!(tracker.get_stats().visits_dropped, 1);
}

#[tokio::test]
async fn test_track_visit_returns_false_when_write_fails() {
    let (tracker, _temp_dir) = common::create_broken_store_tracker().await;

    assert!(!tracker.track_visit(common::test_visit("/")).await);
    assert_eq!(tracker.get_stats().visits_dropped, 1);
}

#[tokio::test]
async fn test_record_visit_error_kind_without_store() {
    let tracker = common::create_degraded_tracker().await;

    let result = tracker.record_visit(&common::test_visit("/")).await;
    assert!(matches!(result, Err(TrackingError::StoreUnavailable)));
}

#[tokio::test]
async fn test_record_visit_error_kind_when_write_fails() {
    let (tracker, _temp_dir) = common::create_broken_store_tracker().await;

    let result = tracker.record_visit(&common::test_visit("/")).await;
    assert!(matches!(result, Err(TrackingError::StoreOperationFailed(_))));
}

#[tokio::test]
async fn test_visitor_count_fallback_without_store() {
    let tracker = common::create_degraded_tracker().await;

    assert!(matches!(tracker.visitor_count().await, Err(TrackingError::StoreUnavailable)));
    assert_eq!(tracker.visitor_count_or_fallback().await, 42);
}

#[tokio::test]
async fn test_visitor_count_fallback_when_counter_row_missing() {
    let (tracker, _temp_dir) = common::create_test_tracker().await;

    // Tables exist but no visit was ever recorded: the singleton row is
    // only created lazily by the first upsert.
    assert!(matches!(tracker.visitor_count().await, Ok(None)));
    assert_eq!(tracker.visitor_count_or_fallback().await, 42);
}

#[tokio::test]
async fn test_visitor_count_fallback_when_read_fails() {
    let (tracker, _temp_dir) = common::create_broken_store_tracker().await;

    assert!(matches!(tracker.visitor_count().await, Err(TrackingError::StoreOperationFailed(_))));
    assert_eq!(tracker.visitor_count_or_fallback().await, 42);
}

#[tokio::test]
async fn test_visitor_count_reads_are_idempotent() {
    let (tracker, _temp_dir) = common::create_test_tracker().await;

    tracker.track_visit(common::test_visit("/")).await;

    let first = tracker.visitor_count_or_fallback().await;
    let second = tracker.visitor_count_or_fallback().await;
    let third = tracker.visitor_count_or_fallback().await;
    assert_eq!(first, 1);
    assert_eq!(second, first);
    assert_eq!(third, first);
}

#[tokio::test]
async fn test_increment_law() {
    let (tracker, _temp_dir) = common::create_test_tracker().await;

    tracker.track_visit(common::test_visit("/")).await;
    let before = tracker.visitor_count_or_fallback().await;

    assert!(tracker.track_visit(common::test_visit("/")).await);

    let after = tracker.visitor_count_or_fallback().await;
    assert_eq!(after, before + 1);
}

#[tokio::test]
async fn test_failed_visit_leaves_counter_unchanged() {
    let (tracker, temp_dir) = common::create_test_tracker().await;

    tracker.track_visit(common::test_visit("/")).await;
    assert_eq!(tracker.visitor_count_or_fallback().await, 1);

    // A second tracker against the same file but pointed at a missing
    // visits table: its event insert fails, so the transaction must roll
    // back and the shared counter must not move.
    let mut config = common::create_test_config(&temp_dir);
    config.database_structure.visits.table_name = String::from("missing_table");
    let broken = common::create_tracker_from_config(config, false).await;

    assert!(!broken.track_visit(common::test_visit("/")).await);
    assert_eq!(tracker.visitor_count_or_fallback().await, 1);
}

#[tokio::test]
async fn test_recent_visits_newest_first_with_limit() {
    let temp_dir = common::create_temp_dir();
    let mut config = common::create_test_config(&temp_dir);
    config.api.recent_visitors_limit = 2;
    let tracker = common::create_tracker_from_config(config, true).await;

    for path in ["/first", "/second", "/third"] {
        assert!(tracker.track_visit(common::test_visit(path)).await);
    }

    let recent = tracker.recent_visits().await.unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].path, "/third");
    assert_eq!(recent[1].path, "/second");
}

#[tokio::test]
async fn test_submit_contact_and_list() {
    let (tracker, _temp_dir) = common::create_test_tracker().await;

    let submission = tracker.submit_contact(&common::test_contact_form(), String::from("127.0.0.1")).await.unwrap();
    assert!(!submission.id.is_empty());
    assert_eq!(submission.name, "Test User");
    assert_eq!(submission.status.as_str(), "new");

    let contacts = tracker.list_contacts().await.unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].id, submission.id);
    assert_eq!(contacts[0].message, "This is a test message");
}

#[tokio::test]
async fn test_submit_contact_validation_error_names_field() {
    let (tracker, _temp_dir) = common::create_test_tracker().await;

    let mut form = common::test_contact_form();
    form.message = None;

    let result = tracker.submit_contact(&form, String::from("127.0.0.1")).await;
    assert!(matches!(result, Err(ContactError::Validation("message"))));
    assert_eq!(tracker.get_stats().contacts_rejected, 1);
    assert!(tracker.list_contacts().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_submit_contact_without_store_is_a_store_error() {
    let tracker = common::create_degraded_tracker().await;

    let result = tracker.submit_contact(&common::test_contact_form(), String::from("127.0.0.1")).await;
    assert!(matches!(result, Err(ContactError::Store(TrackingError::StoreUnavailable))));
}
