// Integration tests for the HTTP surface.

mod common;

use actix_web::{App, test};
use portfolio_actix::http::http::http_service_routes;

#[actix_web::test]
async fn test_health_endpoint() {
    let tracker = common::create_degraded_tracker().await;
    let app = test::init_service(App::new().configure(http_service_routes(common::create_service_data(tracker)))).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["app"].as_str().unwrap().contains("Portfolio"));
    assert!(body["owner"].is_string());
    assert!(body["email"].is_string());
    assert!(body["location"].is_string());
}

#[actix_web::test]
async fn test_stats_endpoint_serves_fallback_without_store() {
    let tracker = common::create_degraded_tracker().await;
    let app = test::init_service(App::new().configure(http_service_routes(common::create_service_data(tracker)))).await;

    let req = test::TestRequest::get().uri("/api/stats").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["visitors"], 42);
    assert!(body["portfolio_owner"].is_string());
    assert!(body["projects"].as_u64().unwrap() >= 1);
}

#[actix_web::test]
async fn test_stats_endpoint_serves_live_count_with_store() {
    let (tracker, _temp_dir) = common::create_test_tracker().await;
    tracker.track_visit(common::test_visit("/")).await;

    let app = test::init_service(App::new().configure(http_service_routes(common::create_service_data(tracker)))).await;

    let req = test::TestRequest::get().uri("/api/stats").to_request();
    let body: serde_json::Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["visitors"], 1);
}

#[actix_web::test]
async fn test_skills_endpoint() {
    let tracker = common::create_degraded_tracker().await;
    let app = test::init_service(App::new().configure(http_service_routes(common::create_service_data(tracker)))).await;

    let req = test::TestRequest::get().uri("/api/skills").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let devops = body["devops_tools"].as_array().unwrap();
    assert!(devops.iter().any(|item| item == "Docker"));
}

#[actix_web::test]
async fn test_projects_endpoint() {
    let tracker = common::create_degraded_tracker().await;
    let app = test::init_service(App::new().configure(http_service_routes(common::create_service_data(tracker)))).await;

    let req = test::TestRequest::get().uri("/api/projects").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let projects = body.as_array().unwrap();
    assert!(!projects.is_empty());
    assert!(projects[0]["name"].is_string());
    assert!(projects[0]["technologies"].is_array());
    assert!(projects[0]["github"].is_string());
    assert!(projects[0]["status"].is_string());
}

#[actix_web::test]
async fn test_contact_post_created() {
    let (tracker, _temp_dir) = common::create_test_tracker().await;
    let app = test::init_service(App::new().configure(http_service_routes(common::create_service_data(tracker.clone())))).await;

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(serde_json::json!({
            "name": "Test User",
            "email": "test@example.com",
            "message": "This is a test message"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "created");
    assert!(!body["contact_id"].as_str().unwrap().is_empty());
    assert_eq!(tracker.get_stats().contacts_accepted, 1);
}

#[actix_web::test]
async fn test_contact_post_missing_field() {
    let (tracker, _temp_dir) = common::create_test_tracker().await;
    let app = test::init_service(App::new().configure(http_service_routes(common::create_service_data(tracker)))).await;

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(serde_json::json!({
            "name": "Test User",
            "email": "test@example.com"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap().contains("message"));
}

#[actix_web::test]
async fn test_contact_post_invalid_json() {
    let (tracker, _temp_dir) = common::create_test_tracker().await;
    let app = test::init_service(App::new().configure(http_service_routes(common::create_service_data(tracker)))).await;

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_contact_post_without_store_is_service_unavailable() {
    let tracker = common::create_degraded_tracker().await;
    let app = test::init_service(App::new().configure(http_service_routes(common::create_service_data(tracker)))).await;

    let req = test::TestRequest::post()
        .uri("/api/contact")
        .set_json(serde_json::json!({
            "name": "Test User",
            "email": "test@example.com",
            "message": "This is a test message"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 503);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
}

#[actix_web::test]
async fn test_contacts_list_requires_token() {
    let (tracker, _temp_dir) = common::create_test_tracker().await;
    let app = test::init_service(App::new().configure(http_service_routes(common::create_service_data(tracker.clone())))).await;

    let req = test::TestRequest::get().uri("/api/contacts").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let req = test::TestRequest::get()
        .uri("/api/contacts")
        .insert_header(("Authorization", "Bearer WrongToken"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    assert_eq!(tracker.get_stats().unauthorized, 2);
}

#[actix_web::test]
async fn test_contacts_list_with_token() {
    let (tracker, _temp_dir) = common::create_test_tracker().await;
    tracker.submit_contact(&common::test_contact_form(), String::from("127.0.0.1")).await.unwrap();

    let token = tracker.config.api.admin_token.clone();
    let app = test::init_service(App::new().configure(http_service_routes(common::create_service_data(tracker)))).await;

    let req = test::TestRequest::get()
        .uri("/api/contacts")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["count"], 1);
    assert_eq!(body["contacts"][0]["name"], "Test User");
    assert_eq!(body["contacts"][0]["status"], "new");
}

#[actix_web::test]
async fn test_visitors_get_shape() {
    let (tracker, _temp_dir) = common::create_test_tracker().await;
    tracker.track_visit(common::test_visit("/")).await;

    let app = test::init_service(App::new().configure(http_service_routes(common::create_service_data(tracker)))).await;

    let req = test::TestRequest::get().uri("/api/visitors").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["total_visitors"], 1);
    assert_eq!(body["recent_visitors"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_visitors_get_degrades_to_fallback_and_empty_list() {
    let tracker = common::create_degraded_tracker().await;
    let app = test::init_service(App::new().configure(http_service_routes(common::create_service_data(tracker)))).await;

    let req = test::TestRequest::get().uri("/api/visitors").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["total_visitors"], 42);
    assert!(body["recent_visitors"].as_array().unwrap().is_empty());
}

#[actix_web::test]
async fn test_visitors_post_tracks() {
    let (tracker, _temp_dir) = common::create_test_tracker().await;
    let app = test::init_service(App::new().configure(http_service_routes(common::create_service_data(tracker)))).await;

    let req = test::TestRequest::post().uri("/api/visitors").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "visitor tracked");
    assert_eq!(body["total"], 1);
}

#[actix_web::test]
async fn test_metrics_endpoint() {
    let (tracker, _temp_dir) = common::create_test_tracker().await;
    tracker.track_visit(common::test_visit("/")).await;

    let app = test::init_service(App::new().configure(http_service_routes(common::create_service_data(tracker)))).await;

    let req = test::TestRequest::get().uri("/metrics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("portfolio_gauge{metric=\"visitors_total\"} 1"));
    assert!(body.contains("portfolio_counter{metric=\"visits_tracked\"} 1"));
}

#[actix_web::test]
async fn test_unknown_route_is_json_404() {
    let tracker = common::create_degraded_tracker().await;
    let app = test::init_service(App::new().configure(http_service_routes(common::create_service_data(tracker.clone())))).await;

    let req = test::TestRequest::get().uri("/nonexistent").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["error"].is_string());
    assert_eq!(tracker.get_stats().not_found, 1);
}

#[actix_web::test]
async fn test_index_page_renders_and_tracks() {
    let (tracker, _temp_dir) = common::create_test_tracker().await;
    let app = test::init_service(App::new().configure(http_service_routes(common::create_service_data(tracker.clone())))).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.to_lowercase().contains("<html"));
    assert!(body.contains(&tracker.config.profile.owner));

    assert_eq!(tracker.visitor_count_or_fallback().await, 1);
    assert_eq!(tracker.get_stats().page_hits, 1);
}

#[actix_web::test]
async fn test_index_page_renders_when_store_is_absent() {
    let tracker = common::create_degraded_tracker().await;
    let app = test::init_service(App::new().configure(http_service_routes(common::create_service_data(tracker.clone())))).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    assert_eq!(tracker.get_stats().visits_dropped, 1);
}

#[actix_web::test]
async fn test_contact_page_renders() {
    let tracker = common::create_degraded_tracker().await;
    let app = test::init_service(App::new().configure(http_service_routes(common::create_service_data(tracker)))).await;

    let req = test::TestRequest::get().uri("/contact").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("<form"));
}
