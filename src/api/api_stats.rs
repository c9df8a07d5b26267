use std::sync::Arc;
use actix_web::{HttpRequest, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use serde_json::json;
use crate::common::common::current_time;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::stats::enums::stats_event::StatsEvent;

#[tracing::instrument(level = "debug", skip(data))]
pub async fn api_service_stats_get(_request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let tracker = &data.portfolio_tracker;
    tracker.update_stats(StatsEvent::ApiHits, 1);

    let visitors = tracker.visitor_count_or_fallback().await;
    let config = &tracker.config;
    let profile = &config.profile;

    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "portfolio_owner": profile.owner,
        "email": profile.email,
        "github": profile.github,
        "location": profile.location,
        "visitors": visitors,
        "projects": config.projects.len(),
        "certifications": profile.certifications,
        "experience": profile.experience,
        "education": profile.education,
        "specialization": profile.specialization
    }))
}

#[tracing::instrument(level = "debug", skip(data))]
pub async fn api_service_prom_get(_request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let tracker = &data.portfolio_tracker;
    tracker.update_stats(StatsEvent::ApiHits, 1);

    let stats = tracker.get_stats();
    let visitors = tracker.visitor_count_or_fallback().await;

    let prometheus_id = &tracker.config.api.prometheus_id;
    let mut string_output = String::with_capacity(2048);

    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "gauge", "visitors_total", visitors as i64, true, Some(&format!("{prometheus_id} gauge metrics"))));
    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "gauge", "uptime_seconds", current_time() - stats.started, false, None));

    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "page_hits", stats.page_hits, true, Some(&format!("{prometheus_id} counter metrics"))));
    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "api_hits", stats.api_hits, false, None));
    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "visits_tracked", stats.visits_tracked, false, None));
    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "visits_dropped", stats.visits_dropped, false, None));
    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "contacts_accepted", stats.contacts_accepted, false, None));
    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "contacts_rejected", stats.contacts_rejected, false, None));
    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "unauthorized", stats.unauthorized, false, None));
    string_output.push_str(&api_service_prom_generate_line(prometheus_id, "counter", "not_found", stats.not_found, false, None));

    HttpResponse::Ok().content_type(ContentType::plaintext()).body(string_output)
}

pub fn api_service_prom_generate_line(id: &str, type_metric: &str, metric: &str, value: i64, without_header: bool, description: Option<&str>) -> String
{
    if without_header {
        format!(
            "# HELP {}_{} {}\n# TYPE {}_{} {}\n{}_{}{{metric=\"{}\"}} {}\n",
            id, type_metric, description.unwrap_or(""),
            id, type_metric, type_metric,
            id, type_metric, metric, value
        )
    } else {
        format!("{id}_{type_metric}{{metric=\"{metric}\"}} {value}\n")
    }
}
