use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use actix_cors::Cors;
use actix_web::{App, http, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::ServerHandle;
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use log::info;
use serde_json::json;
use crate::api::api::{api_service_health_get, http_request_origin, http_request_signature};
use crate::api::api_contacts::{api_service_contact_post, api_service_contacts_get};
use crate::api::api_content::{api_service_projects_get, api_service_skills_get};
use crate::api::api_stats::{api_service_prom_get, api_service_stats_get};
use crate::api::api_visitors::{api_service_visitors_get, api_service_visitors_post};
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::http::pages::{render_contact, render_index};
use crate::http::structs::http_service_data::HttpServiceData;
use crate::portfolio::structs::portfolio_tracker::PortfolioTracker;
use crate::portfolio::structs::visit_event::VisitEvent;
use crate::stats::enums::stats_event::StatsEvent;

pub fn http_service_cors() -> Cors
{
    Cors::default()
        .send_wildcard()
        .allowed_methods(vec!["GET", "POST"])
        .allowed_headers(vec![http::header::X_FORWARDED_FOR, http::header::ACCEPT, http::header::AUTHORIZATION])
        .allowed_header(http::header::CONTENT_TYPE)
        .max_age(1)
}

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/").route(web::get().to(http_service_index)));
        cfg.service(web::resource("/contact").route(web::get().to(http_service_contact_page)));
        cfg.service(web::resource("/health").route(web::get().to(api_service_health_get)));
        cfg.service(web::resource("/api/stats").route(web::get().to(api_service_stats_get)));
        cfg.service(web::resource("/api/skills").route(web::get().to(api_service_skills_get)));
        cfg.service(web::resource("/api/projects").route(web::get().to(api_service_projects_get)));
        cfg.service(web::resource("/api/contact").route(web::post().to(api_service_contact_post)));
        cfg.service(web::resource("/api/contacts").route(web::get().to(api_service_contacts_get)));
        cfg.service(web::resource("/api/visitors")
            .route(web::get().to(api_service_visitors_get))
            .route(web::post().to(api_service_visitors_post)));
        cfg.service(web::resource("/metrics").route(web::get().to(api_service_prom_get)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

pub async fn http_service(
    addr: SocketAddr,
    data: Arc<PortfolioTracker>,
    http_server_config: Arc<HttpServerConfig>
) -> (ServerHandle, impl Future<Output=Result<(), std::io::Error>>)
{
    info!("[HTTP] Starting server listener on {}", addr);

    let service_data = Arc::new(HttpServiceData {
        portfolio_tracker: data,
        http_server_config: http_server_config.clone(),
    });

    let server = HttpServer::new(move || {
        App::new()
            .wrap(http_service_cors())
            .configure(http_service_routes(service_data.clone()))
    })
        .keep_alive(Duration::from_secs(http_server_config.keep_alive))
        .client_request_timeout(Duration::from_secs(http_server_config.request_timeout))
        .client_disconnect_timeout(Duration::from_secs(http_server_config.disconnect_timeout))
        .workers(http_server_config.threads as usize)
        .bind((addr.ip(), addr.port()))
        .unwrap()
        .disable_signals()
        .run();

    (server.handle(), server)
}

/// Renders the portfolio page and records the visit. Tracking is
/// fire-and-forget: a failed or absent store never fails the render.
#[tracing::instrument(level = "debug", skip(data))]
pub async fn http_service_index(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let tracker = &data.portfolio_tracker;
    tracker.update_stats(StatsEvent::PageHits, 1);

    let event = VisitEvent::from_parts(
        http_request_origin(&request, &data),
        http_request_signature(&request),
        request.path()
    );
    tracker.track_visit(event).await;

    HttpResponse::Ok().content_type(ContentType::html()).body(render_index(&tracker.config))
}

#[tracing::instrument(level = "debug", skip(data))]
pub async fn http_service_contact_page(_request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    data.portfolio_tracker.update_stats(StatsEvent::PageHits, 1);
    HttpResponse::Ok().content_type(ContentType::html()).body(render_contact(&data.portfolio_tracker.config))
}

pub async fn http_service_not_found(_request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    data.portfolio_tracker.update_stats(StatsEvent::NotFound, 1);
    HttpResponse::NotFound().content_type(ContentType::json()).json(json!({
        "error": "not found"
    }))
}
