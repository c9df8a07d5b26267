use log::{debug, error};
use crate::portfolio::enums::tracking_error::TrackingError;
use crate::portfolio::structs::portfolio_tracker::PortfolioTracker;
use crate::portfolio::structs::visit_event::VisitEvent;
use crate::stats::enums::stats_event::StatsEvent;

impl PortfolioTracker {
    /// Records a page view: the event insert and the counter increment run
    /// in one store transaction. Never errors to the caller; a page render
    /// must not fail because tracking did.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn track_visit(&self, event: VisitEvent) -> bool
    {
        match self.record_visit(&event).await {
            Ok(()) => {
                self.update_stats(StatsEvent::VisitsTracked, 1);
                true
            }
            Err(TrackingError::StoreUnavailable) => {
                debug!("[VISITS] Dropping visit to {}, store is not configured", event.path);
                self.update_stats(StatsEvent::VisitsDropped, 1);
                false
            }
            Err(error) => {
                error!("[VISITS] Error tracking visitor: {error}");
                self.update_stats(StatsEvent::VisitsDropped, 1);
                false
            }
        }
    }

    pub async fn record_visit(&self, event: &VisitEvent) -> Result<(), TrackingError>
    {
        let sqlx = self.sqlx.as_ref().ok_or(TrackingError::StoreUnavailable)?;
        self.with_timeout(sqlx.record_visit(&self.config, event)).await
    }

    pub async fn visitor_count(&self) -> Result<Option<u64>, TrackingError>
    {
        let sqlx = self.sqlx.as_ref().ok_or(TrackingError::StoreUnavailable)?;
        let stats = self.with_timeout(sqlx.aggregate_stats(&self.config)).await?;
        Ok(stats.map(|aggregate| aggregate.total_visitors))
    }

    /// The stats-reader contract: never fails, always non-negative. Serves
    /// the configured fallback constant when the store is absent, the
    /// counter row does not exist yet, or the read fails.
    pub async fn visitor_count_or_fallback(&self) -> u64
    {
        match self.visitor_count().await {
            Ok(Some(count)) => count,
            Ok(None) => self.config.api.fallback_visitor_count,
            Err(TrackingError::StoreUnavailable) => self.config.api.fallback_visitor_count,
            Err(error) => {
                error!("[VISITS] Error reading visitor count: {error}");
                self.config.api.fallback_visitor_count
            }
        }
    }

    pub async fn recent_visits(&self) -> Result<Vec<VisitEvent>, TrackingError>
    {
        let sqlx = self.sqlx.as_ref().ok_or(TrackingError::StoreUnavailable)?;
        self.with_timeout(sqlx.recent_visits(&self.config, self.config.api.recent_visitors_limit)).await
    }
}
