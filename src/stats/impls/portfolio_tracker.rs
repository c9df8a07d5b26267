use std::sync::atomic::Ordering;
use crate::portfolio::structs::portfolio_tracker::PortfolioTracker;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;

impl PortfolioTracker {
    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            page_hits: self.stats.page_hits.load(Ordering::SeqCst),
            api_hits: self.stats.api_hits.load(Ordering::SeqCst),
            visits_tracked: self.stats.visits_tracked.load(Ordering::SeqCst),
            visits_dropped: self.stats.visits_dropped.load(Ordering::SeqCst),
            contacts_accepted: self.stats.contacts_accepted.load(Ordering::SeqCst),
            contacts_rejected: self.stats.contacts_rejected.load(Ordering::SeqCst),
            unauthorized: self.stats.unauthorized.load(Ordering::SeqCst),
            not_found: self.stats.not_found.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        match event {
            StatsEvent::PageHits => {
                if value > 0 { self.stats.page_hits.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.page_hits.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::ApiHits => {
                if value > 0 { self.stats.api_hits.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.api_hits.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::VisitsTracked => {
                if value > 0 { self.stats.visits_tracked.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.visits_tracked.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::VisitsDropped => {
                if value > 0 { self.stats.visits_dropped.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.visits_dropped.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::ContactsAccepted => {
                if value > 0 { self.stats.contacts_accepted.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.contacts_accepted.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::ContactsRejected => {
                if value > 0 { self.stats.contacts_rejected.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.contacts_rejected.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::Unauthorized => {
                if value > 0 { self.stats.unauthorized.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.unauthorized.fetch_sub(-value, Ordering::SeqCst); }
            }
            StatsEvent::NotFound => {
                if value > 0 { self.stats.not_found.fetch_add(value, Ordering::SeqCst); }
                if value < 0 { self.stats.not_found.fetch_sub(-value, Ordering::SeqCst); }
            }
        }
        self.get_stats()
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        match event {
            StatsEvent::PageHits => { self.stats.page_hits.store(value, Ordering::SeqCst); }
            StatsEvent::ApiHits => { self.stats.api_hits.store(value, Ordering::SeqCst); }
            StatsEvent::VisitsTracked => { self.stats.visits_tracked.store(value, Ordering::SeqCst); }
            StatsEvent::VisitsDropped => { self.stats.visits_dropped.store(value, Ordering::SeqCst); }
            StatsEvent::ContactsAccepted => { self.stats.contacts_accepted.store(value, Ordering::SeqCst); }
            StatsEvent::ContactsRejected => { self.stats.contacts_rejected.store(value, Ordering::SeqCst); }
            StatsEvent::Unauthorized => { self.stats.unauthorized.store(value, Ordering::SeqCst); }
            StatsEvent::NotFound => { self.stats.not_found.store(value, Ordering::SeqCst); }
        }
        self.get_stats()
    }
}
