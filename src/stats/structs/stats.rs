use serde::{Deserialize, Serialize};

/// Snapshot of the process counters at a point in time.
#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct Stats {
    pub started: i64,
    pub page_hits: i64,
    pub api_hits: i64,
    pub visits_tracked: i64,
    pub visits_dropped: i64,
    pub contacts_accepted: i64,
    pub contacts_rejected: i64,
    pub unauthorized: i64,
    pub not_found: i64,
}
