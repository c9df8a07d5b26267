use serde::{Deserialize, Serialize};

/// One page view. Immutable once written; the tracker only ever inserts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VisitEvent {
    pub origin_address: String,
    pub client_signature: String,
    pub observed_at: i64,
    pub path: String,
}
