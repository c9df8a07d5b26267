use serde::{Deserialize, Serialize};
use crate::config::structs::database_structure_config_contacts::DatabaseStructureConfigContacts;
use crate::config::structs::database_structure_config_stats::DatabaseStructureConfigStats;
use crate::config::structs::database_structure_config_visits::DatabaseStructureConfigVisits;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseStructureConfig {
    pub visits: DatabaseStructureConfigVisits,
    pub stats: DatabaseStructureConfigStats,
    pub contacts: DatabaseStructureConfigContacts
}
