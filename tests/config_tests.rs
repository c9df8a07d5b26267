// Integration tests for configuration loading and saving.

mod common;

use portfolio_actix::config::enums::configuration_error::ConfigurationError;
use portfolio_actix::config::structs::configuration::Configuration;
use portfolio_actix::database::enums::database_drivers::DatabaseDrivers;

#[test]
fn test_save_and_load_file_round_trip() {
    let temp_dir = common::create_temp_dir();
    let path = temp_dir.path().join("config.toml");
    let path = path.to_str().unwrap();

    let mut config = Configuration::init();
    config.api.fallback_visitor_count = 7;
    config.database.engine = DatabaseDrivers::pgsql;

    Configuration::save_file(path, toml::to_string(&config).unwrap()).unwrap();
    let loaded = Configuration::load_file(path).unwrap();

    assert_eq!(loaded.api.fallback_visitor_count, 7);
    assert_eq!(loaded.database.engine, DatabaseDrivers::pgsql);
    assert_eq!(loaded.profile.owner, config.profile.owner);
}

#[test]
fn test_load_file_parse_error() {
    let temp_dir = common::create_temp_dir();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "log_level = [broken").unwrap();

    let result = Configuration::load_file(path.to_str().unwrap());
    assert!(matches!(result, Err(ConfigurationError::ParseError(_))));
}

#[test]
fn test_database_drivers_serde_names() {
    assert_eq!(serde_json::to_string(&DatabaseDrivers::sqlite3).unwrap(), "\"sqlite3\"");
    assert_eq!(serde_json::to_string(&DatabaseDrivers::mysql).unwrap(), "\"mysql\"");
    assert_eq!(serde_json::to_string(&DatabaseDrivers::pgsql).unwrap(), "\"pgsql\"");
}

#[test]
fn test_default_structure_names() {
    let config = Configuration::init();
    assert_eq!(config.database_structure.visits.table_name, "visits");
    assert_eq!(config.database_structure.stats.table_name, "stats");
    assert_eq!(config.database_structure.contacts.table_name, "contacts");
    assert_eq!(config.database_structure.stats.column_total_visitors, "total_visitors");
}
