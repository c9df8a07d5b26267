use std::sync::Arc;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::portfolio::structs::portfolio_tracker::PortfolioTracker;

/// Shared application data available to all request handlers.
///
/// Injected into Actix-web's application data; both fields are wrapped in
/// `Arc` for safe sharing across worker threads.
pub struct HttpServiceData {
    /// Reference to the main tracker instance.
    pub portfolio_tracker: Arc<PortfolioTracker>,

    /// Configuration for this HTTP server instance.
    pub http_server_config: Arc<HttpServerConfig>,
}
