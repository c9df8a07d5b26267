use serde::{Deserialize, Serialize};
use crate::config::structs::api_config::ApiConfig;
use crate::config::structs::database_config::DatabaseConfig;
use crate::config::structs::database_structure_config::DatabaseStructureConfig;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::config::structs::profile_config::ProfileConfig;
use crate::config::structs::project_config::ProjectConfig;
use crate::config::structs::skill_group_config::SkillGroupConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub http_server: HttpServerConfig,
    pub api: ApiConfig,
    pub database: DatabaseConfig,
    pub database_structure: DatabaseStructureConfig,
    pub profile: ProfileConfig,
    pub skills: Vec<SkillGroupConfig>,
    pub projects: Vec<ProjectConfig>
}
