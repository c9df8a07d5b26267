use serde::{Deserialize, Serialize};

/// The singleton visitor-counter row. Created lazily by the first upsert,
/// mutated only through the tracker's atomic increment.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregateStats {
    pub total_visitors: u64,
    pub last_updated: i64,
}
