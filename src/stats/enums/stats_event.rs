use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Each variant represents a specific counter that can be incremented or
/// set. Used with `PortfolioTracker::update_stats()` to update counters.
#[derive(Debug, Serialize, Deserialize, Clone, Copy)]
pub enum StatsEvent {
    PageHits,
    ApiHits,
    VisitsTracked,
    VisitsDropped,
    ContactsAccepted,
    ContactsRejected,
    Unauthorized,
    NotFound,
}
