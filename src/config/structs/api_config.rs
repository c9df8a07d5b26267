use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ApiConfig {
    pub admin_token: String,
    pub prometheus_id: String,
    pub recent_visitors_limit: u64,
    pub contacts_limit: u64,
    pub fallback_visitor_count: u64
}
