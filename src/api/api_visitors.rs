use std::sync::Arc;
use actix_web::{HttpRequest, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use log::debug;
use serde_json::json;
use crate::api::api::{http_request_origin, http_request_signature};
use crate::http::structs::http_service_data::HttpServiceData;
use crate::portfolio::structs::visit_event::VisitEvent;
use crate::stats::enums::stats_event::StatsEvent;

#[tracing::instrument(level = "debug", skip(data))]
pub async fn api_service_visitors_get(_request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let tracker = &data.portfolio_tracker;
    tracker.update_stats(StatsEvent::ApiHits, 1);

    let total_visitors = tracker.visitor_count_or_fallback().await;
    let recent_visitors = match tracker.recent_visits().await {
        Ok(visits) => visits,
        Err(error) => {
            debug!("[VISITS] Serving empty recent list: {error}");
            Vec::new()
        }
    };

    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "total_visitors": total_visitors,
        "recent_visitors": recent_visitors
    }))
}

/// Force-increments the visitor counter, mirroring what a page render does.
#[tracing::instrument(level = "debug", skip(data))]
pub async fn api_service_visitors_post(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let tracker = &data.portfolio_tracker;
    tracker.update_stats(StatsEvent::ApiHits, 1);

    let event = VisitEvent::from_parts(
        http_request_origin(&request, &data),
        http_request_signature(&request),
        request.path()
    );
    tracker.track_visit(event).await;

    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "status": "visitor tracked",
        "total": tracker.visitor_count_or_fallback().await
    }))
}
