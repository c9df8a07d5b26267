#![allow(dead_code)]
use std::sync::Arc;
use tempfile::TempDir;
use portfolio_actix::config::structs::configuration::Configuration;
use portfolio_actix::http::structs::http_service_data::HttpServiceData;
use portfolio_actix::portfolio::structs::contact_form::ContactForm;
use portfolio_actix::portfolio::structs::portfolio_tracker::PortfolioTracker;
use portfolio_actix::portfolio::structs::visit_event::VisitEvent;

pub type TestTracker = Arc<PortfolioTracker>;

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn create_test_config(temp_dir: &TempDir) -> Configuration {
    let mut config = Configuration::init();
    config.database.path = format!("sqlite://{}/portfolio.db", temp_dir.path().display());
    config
}

pub fn create_degraded_config() -> Configuration {
    let mut config = Configuration::init();
    config.database.enabled = false;
    config
}

pub async fn create_tracker_from_config(config: Configuration, create_database: bool) -> TestTracker {
    Arc::new(PortfolioTracker::new(Arc::new(config), create_database).await)
}

/// Tracker backed by a fresh file-based SQLite store with tables created.
pub async fn create_test_tracker() -> (TestTracker, TempDir) {
    let temp_dir = create_temp_dir();
    let tracker = create_tracker_from_config(create_test_config(&temp_dir), true).await;
    assert!(tracker.sqlx.is_some(), "test tracker should have a connected store");
    (tracker, temp_dir)
}

/// Tracker with no store handle at all (database disabled).
pub async fn create_degraded_tracker() -> TestTracker {
    let tracker = create_tracker_from_config(create_degraded_config(), false).await;
    assert!(tracker.sqlx.is_none(), "degraded tracker should not have a store");
    tracker
}

/// Tracker whose store connects but has no tables, so every operation fails
/// at call time.
pub async fn create_broken_store_tracker() -> (TestTracker, TempDir) {
    let temp_dir = create_temp_dir();
    let tracker = create_tracker_from_config(create_test_config(&temp_dir), false).await;
    assert!(tracker.sqlx.is_some(), "broken-store tracker should still connect");
    (tracker, temp_dir)
}

pub fn create_service_data(tracker: TestTracker) -> Arc<HttpServiceData> {
    let http_server_config = Arc::new(tracker.config.http_server.clone());
    Arc::new(HttpServiceData {
        portfolio_tracker: tracker,
        http_server_config,
    })
}

pub fn test_visit(path: &str) -> VisitEvent {
    VisitEvent::from_parts(
        Some(String::from("127.0.0.1")),
        Some(String::from("TestAgent")),
        path
    )
}

pub fn test_contact_form() -> ContactForm {
    ContactForm {
        name: Some(String::from("Test User")),
        email: Some(String::from("test@example.com")),
        message: Some(String::from("This is a test message")),
    }
}
