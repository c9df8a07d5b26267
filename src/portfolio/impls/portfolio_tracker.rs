use std::future::Future;
use std::process::exit;
use std::sync::Arc;
use std::sync::atomic::AtomicI64;
use std::time::Duration;
use chrono::Utc;
use log::{error, info, warn};
use tokio::time::timeout;
use crate::config::structs::configuration::Configuration;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::portfolio::enums::tracking_error::TrackingError;
use crate::portfolio::structs::portfolio_tracker::PortfolioTracker;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl PortfolioTracker {
    pub async fn new(config: Arc<Configuration>, create_database: bool) -> PortfolioTracker
    {
        let stats = Arc::new(StatsAtomics {
            started: AtomicI64::new(Utc::now().timestamp()),
            page_hits: AtomicI64::new(0),
            api_hits: AtomicI64::new(0),
            visits_tracked: AtomicI64::new(0),
            visits_dropped: AtomicI64::new(0),
            contacts_accepted: AtomicI64::new(0),
            contacts_rejected: AtomicI64::new(0),
            unauthorized: AtomicI64::new(0),
            not_found: AtomicI64::new(0),
        });

        if !config.database.enabled {
            info!("[BOOT] Database disabled, running in degraded mode...");
            return PortfolioTracker { config, stats, sqlx: None };
        }

        let sqlx = match DatabaseConnector::new(config.clone(), create_database).await {
            Ok(connector) => Some(connector),
            Err(error) => {
                if create_database {
                    error!("[BOOT] Unable to create the database tables: {error}");
                    exit(1);
                }
                warn!("[BOOT] Store unreachable, running in degraded mode: {error}");
                None
            }
        };

        PortfolioTracker { config, stats, sqlx }
    }

    /// Bounds a store round-trip with the configured operation timeout so a
    /// hanging store degrades the response instead of the request.
    pub(crate) async fn with_timeout<T, F>(&self, operation: F) -> Result<T, TrackingError>
    where
        F: Future<Output = Result<T, sqlx::Error>>
    {
        let seconds = self.config.database.timeout;
        match timeout(Duration::from_secs(seconds), operation).await {
            Ok(result) => result.map_err(TrackingError::from),
            Err(_) => Err(TrackingError::StoreTimeout(seconds)),
        }
    }
}
