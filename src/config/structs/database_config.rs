use serde::{Deserialize, Serialize};
use crate::database::enums::database_drivers::DatabaseDrivers;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseConfig {
    pub enabled: bool,
    pub engine: DatabaseDrivers,
    pub path: String,
    /* Seconds before a single store operation is abandoned and the
       degraded/fallback response is served instead. */
    pub timeout: u64
}
