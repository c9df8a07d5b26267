use std::sync::Arc;
use actix_web::{HttpRequest, HttpResponse, web};
use actix_web::http::header::ContentType;
use actix_web::web::Data;
use log::error;
use serde_json::json;
use crate::api::api::{api_service_token, http_request_origin};
use crate::http::structs::http_service_data::HttpServiceData;
use crate::portfolio::enums::contact_error::ContactError;
use crate::portfolio::structs::contact_form::ContactForm;
use crate::stats::enums::stats_event::StatsEvent;

#[tracing::instrument(level = "debug", skip(data))]
pub async fn api_service_contact_post(request: HttpRequest, body: web::Bytes, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let tracker = &data.portfolio_tracker;
    tracker.update_stats(StatsEvent::ApiHits, 1);

    let form: ContactForm = match serde_json::from_slice(&body) {
        Ok(form) => form,
        Err(_) => {
            tracker.update_stats(StatsEvent::ContactsRejected, 1);
            return HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({
                "error": "invalid json body"
            }));
        }
    };

    let origin_address = http_request_origin(&request, &data).unwrap_or_else(|| String::from("unknown"));

    match tracker.submit_contact(&form, origin_address).await {
        Ok(submission) => {
            HttpResponse::Created().content_type(ContentType::json()).json(json!({
                "status": "created",
                "message": "contact submission stored",
                "contact_id": submission.id
            }))
        }
        Err(ContactError::Validation(field)) => {
            HttpResponse::BadRequest().content_type(ContentType::json()).json(json!({
                "error": format!("missing field: {field}")
            }))
        }
        Err(ContactError::Store(error)) => {
            error!("[CONTACTS] Unable to store submission: {error}");
            HttpResponse::ServiceUnavailable().content_type(ContentType::json()).json(json!({
                "error": "storage unavailable"
            }))
        }
    }
}

#[tracing::instrument(level = "debug", skip(data))]
pub async fn api_service_contacts_get(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let tracker = &data.portfolio_tracker;
    tracker.update_stats(StatsEvent::ApiHits, 1);

    if let Some(error_return) = api_service_token(&request, &data).await { return error_return; }

    match tracker.list_contacts().await {
        Ok(contacts) => {
            HttpResponse::Ok().content_type(ContentType::json()).json(json!({
                "count": contacts.len(),
                "contacts": contacts
            }))
        }
        Err(error) => {
            error!("[CONTACTS] Unable to list submissions: {error}");
            HttpResponse::ServiceUnavailable().content_type(ContentType::json()).json(json!({
                "error": "storage unavailable"
            }))
        }
    }
}
