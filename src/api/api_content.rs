use std::sync::Arc;
use actix_web::{HttpRequest, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use serde_json::json;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::stats::enums::stats_event::StatsEvent;

#[tracing::instrument(level = "debug", skip(data))]
pub async fn api_service_skills_get(_request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let tracker = &data.portfolio_tracker;
    tracker.update_stats(StatsEvent::ApiHits, 1);

    let mut groups = serde_json::Map::new();
    for group in &tracker.config.skills {
        groups.insert(group.category.clone(), json!(group.items));
    }

    HttpResponse::Ok().content_type(ContentType::json()).json(serde_json::Value::Object(groups))
}

#[tracing::instrument(level = "debug", skip(data))]
pub async fn api_service_projects_get(_request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let tracker = &data.portfolio_tracker;
    tracker.update_stats(StatsEvent::ApiHits, 1);

    HttpResponse::Ok().content_type(ContentType::json()).json(&tracker.config.projects)
}
