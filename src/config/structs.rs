pub mod api_config;
pub mod configuration;
pub mod database_config;
pub mod database_structure_config;
pub mod database_structure_config_contacts;
pub mod database_structure_config_stats;
pub mod database_structure_config_visits;
pub mod http_server_config;
pub mod profile_config;
pub mod project_config;
pub mod skill_group_config;
