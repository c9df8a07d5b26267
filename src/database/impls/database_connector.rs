use std::sync::Arc;
use sqlx::Error;
use crate::config::structs::configuration::Configuration;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_mysql::DatabaseConnectorMySQL;
use crate::database::structs::database_connector_pgsql::DatabaseConnectorPgSQL;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::portfolio::structs::aggregate_stats::AggregateStats;
use crate::portfolio::structs::contact_submission::ContactSubmission;
use crate::portfolio::structs::visit_event::VisitEvent;

impl DatabaseConnector {
    pub async fn new(config: Arc<Configuration>, create_database: bool) -> Result<DatabaseConnector, Error>
    {
        match config.database.engine {
            DatabaseDrivers::sqlite3 => { DatabaseConnectorSQLite::database_connector(config, create_database).await }
            DatabaseDrivers::mysql => { DatabaseConnectorMySQL::database_connector(config, create_database).await }
            DatabaseDrivers::pgsql => { DatabaseConnectorPgSQL::database_connector(config, create_database).await }
        }
    }

    pub async fn setup_database(&self, config: &Configuration) -> Result<(), Error>
    {
        match self.engine {
            Some(DatabaseDrivers::sqlite3) => { self.sqlite.as_ref().unwrap().setup_database(config).await }
            Some(DatabaseDrivers::mysql) => { self.mysql.as_ref().unwrap().setup_database(config).await }
            Some(DatabaseDrivers::pgsql) => { self.pgsql.as_ref().unwrap().setup_database(config).await }
            None => { Err(Error::RowNotFound) }
        }
    }

    /// Inserts the visit event and increments the visitor counter in a
    /// single transaction; either both land or neither does.
    pub async fn record_visit(&self, config: &Configuration, event: &VisitEvent) -> Result<(), Error>
    {
        match self.engine {
            Some(DatabaseDrivers::sqlite3) => { self.sqlite.as_ref().unwrap().record_visit(config, event).await }
            Some(DatabaseDrivers::mysql) => { self.mysql.as_ref().unwrap().record_visit(config, event).await }
            Some(DatabaseDrivers::pgsql) => { self.pgsql.as_ref().unwrap().record_visit(config, event).await }
            None => { Err(Error::RowNotFound) }
        }
    }

    /// Find-one on the singleton counter row; `Ok(None)` when no visit has
    /// ever been recorded.
    pub async fn aggregate_stats(&self, config: &Configuration) -> Result<Option<AggregateStats>, Error>
    {
        match self.engine {
            Some(DatabaseDrivers::sqlite3) => { self.sqlite.as_ref().unwrap().aggregate_stats(config).await }
            Some(DatabaseDrivers::mysql) => { self.mysql.as_ref().unwrap().aggregate_stats(config).await }
            Some(DatabaseDrivers::pgsql) => { self.pgsql.as_ref().unwrap().aggregate_stats(config).await }
            None => { Err(Error::RowNotFound) }
        }
    }

    pub async fn recent_visits(&self, config: &Configuration, limit: u64) -> Result<Vec<VisitEvent>, Error>
    {
        match self.engine {
            Some(DatabaseDrivers::sqlite3) => { self.sqlite.as_ref().unwrap().recent_visits(config, limit).await }
            Some(DatabaseDrivers::mysql) => { self.mysql.as_ref().unwrap().recent_visits(config, limit).await }
            Some(DatabaseDrivers::pgsql) => { self.pgsql.as_ref().unwrap().recent_visits(config, limit).await }
            None => { Err(Error::RowNotFound) }
        }
    }

    pub async fn insert_contact(&self, config: &Configuration, contact: &ContactSubmission) -> Result<(), Error>
    {
        match self.engine {
            Some(DatabaseDrivers::sqlite3) => { self.sqlite.as_ref().unwrap().insert_contact(config, contact).await }
            Some(DatabaseDrivers::mysql) => { self.mysql.as_ref().unwrap().insert_contact(config, contact).await }
            Some(DatabaseDrivers::pgsql) => { self.pgsql.as_ref().unwrap().insert_contact(config, contact).await }
            None => { Err(Error::RowNotFound) }
        }
    }

    pub async fn list_contacts(&self, config: &Configuration, limit: u64) -> Result<Vec<ContactSubmission>, Error>
    {
        match self.engine {
            Some(DatabaseDrivers::sqlite3) => { self.sqlite.as_ref().unwrap().list_contacts(config, limit).await }
            Some(DatabaseDrivers::mysql) => { self.mysql.as_ref().unwrap().list_contacts(config, limit).await }
            Some(DatabaseDrivers::pgsql) => { self.pgsql.as_ref().unwrap().list_contacts(config, limit).await }
            None => { Err(Error::RowNotFound) }
        }
    }
}
