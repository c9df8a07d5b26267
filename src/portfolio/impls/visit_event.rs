use crate::common::common::current_time;
use crate::portfolio::structs::visit_event::VisitEvent;

impl VisitEvent {
    /// Shapes a visit event from whatever the request exposed. Missing or
    /// empty fields become the literal `"unknown"`; shaping never fails.
    pub fn from_parts(origin_address: Option<String>, client_signature: Option<String>, path: &str) -> VisitEvent
    {
        VisitEvent {
            origin_address: origin_address.filter(|value| !value.is_empty()).unwrap_or_else(|| String::from("unknown")),
            client_signature: client_signature.filter(|value| !value.is_empty()).unwrap_or_else(|| String::from("unknown")),
            observed_at: current_time(),
            path: path.to_string(),
        }
    }
}
