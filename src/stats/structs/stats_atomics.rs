use std::sync::atomic::AtomicI64;

/// Atomic counters behind the [`super::stats::Stats`] snapshot.
#[derive(Debug)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub page_hits: AtomicI64,
    pub api_hits: AtomicI64,
    pub visits_tracked: AtomicI64,
    pub visits_dropped: AtomicI64,
    pub contacts_accepted: AtomicI64,
    pub contacts_rejected: AtomicI64,
    pub unauthorized: AtomicI64,
    pub not_found: AtomicI64,
}
