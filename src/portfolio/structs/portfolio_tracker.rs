use std::sync::Arc;
use crate::config::structs::configuration::Configuration;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::stats::structs::stats_atomics::StatsAtomics;

/// Central application state shared by every request handler.
///
/// The store client is constructed once at bootstrap and injected here;
/// `sqlx` is `None` when the database is disabled or unreachable, which
/// puts the tracker into degraded mode.
pub struct PortfolioTracker {
    pub config: Arc<Configuration>,
    pub stats: Arc<StatsAtomics>,
    pub sqlx: Option<DatabaseConnector>,
}
