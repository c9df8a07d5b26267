use std::sync::Arc;
use actix_web::{http, HttpRequest, HttpResponse};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use serde_json::json;
use crate::http::structs::http_service_data::HttpServiceData;
use crate::stats::enums::stats_event::StatsEvent;

/// Network origin of the request: the configured real-IP header when a
/// reverse proxy sets it, otherwise the peer address.
pub fn http_request_origin(request: &HttpRequest, data: &Data<Arc<HttpServiceData>>) -> Option<String>
{
    if let Some(header) = request.headers().get(data.http_server_config.real_ip.as_str()) {
        if let Ok(value) = header.to_str() {
            return Some(value.to_string());
        }
    }
    request.peer_addr().map(|addr| addr.ip().to_string())
}

pub fn http_request_signature(request: &HttpRequest) -> Option<String>
{
    request.headers()
        .get(http::header::USER_AGENT)
        .and_then(|header| header.to_str().ok())
        .map(String::from)
}

/// Shared-secret check for admin endpoints. Returns the 401 response to
/// send when the `Authorization: Bearer <token>` header is absent or does
/// not match.
pub async fn api_service_token(request: &HttpRequest, data: &Data<Arc<HttpServiceData>>) -> Option<HttpResponse>
{
    let token = request.headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    match token {
        Some(token) if token == data.portfolio_tracker.config.api.admin_token => { None }
        _ => {
            data.portfolio_tracker.update_stats(StatsEvent::Unauthorized, 1);
            Some(HttpResponse::Unauthorized().content_type(ContentType::json()).json(json!({
                "error": "unauthorized"
            })))
        }
    }
}

#[tracing::instrument(level = "debug", skip(data))]
pub async fn api_service_health_get(_request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    data.portfolio_tracker.update_stats(StatsEvent::ApiHits, 1);

    let profile = &data.portfolio_tracker.config.profile;
    HttpResponse::Ok().content_type(ContentType::json()).json(json!({
        "status": "healthy",
        "app": profile.app_name,
        "owner": profile.owner,
        "email": profile.email,
        "location": profile.location,
        "github": profile.github,
        "education": profile.education
    }))
}
