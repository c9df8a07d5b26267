use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, Error, Pool, Row, Sqlite};
use crate::common::common::current_time;
use crate::config::structs::configuration::Configuration;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::portfolio::enums::contact_status::ContactStatus;
use crate::portfolio::structs::aggregate_stats::AggregateStats;
use crate::portfolio::structs::contact_submission::ContactSubmission;
use crate::portfolio::structs::visit_event::VisitEvent;

const LOG_PREFIX: &str = "[SQLite]";

impl DatabaseConnectorSQLite {
    pub async fn create(dsl: &str, timeout: u64) -> Result<Pool<Sqlite>, Error>
    {
        let options = SqliteConnectOptions::from_str(dsl)?
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        SqlitePoolOptions::new()
            .acquire_timeout(Duration::from_secs(timeout))
            .connect_with(options.create_if_missing(true))
            .await
    }

    #[tracing::instrument(level = "debug", skip(config))]
    pub async fn database_connector(config: Arc<Configuration>, create_database: bool) -> Result<DatabaseConnector, Error>
    {
        let pool = DatabaseConnectorSQLite::create(config.database.path.as_str(), config.database.timeout).await?;

        let structure = DatabaseConnector {
            mysql: None,
            sqlite: Some(DatabaseConnectorSQLite { pool }),
            pgsql: None,
            engine: Some(DatabaseDrivers::sqlite3),
        };

        if create_database {
            info!("[BOOT] Database creation triggered for SQLite.");
            structure.sqlite.as_ref().unwrap().setup_database(&config).await?;
        }

        Ok(structure)
    }

    pub async fn setup_database(&self, config: &Configuration) -> Result<(), Error>
    {
        let visits = &config.database_structure.visits;
        info!("{} Creating table {}", LOG_PREFIX, visits.table_name);
        let query = format!(
            "CREATE TABLE IF NOT EXISTS `{}` (`{}` INTEGER PRIMARY KEY AUTOINCREMENT, `{}` TEXT NOT NULL, `{}` TEXT NOT NULL, `{}` INTEGER NOT NULL, `{}` TEXT NOT NULL)",
            visits.table_name, visits.column_id, visits.column_origin, visits.column_signature, visits.column_observed_at, visits.column_path
        );
        sqlx::query(&query).execute(&self.pool).await?;

        let stats = &config.database_structure.stats;
        info!("{} Creating table {}", LOG_PREFIX, stats.table_name);
        let query = format!(
            "CREATE TABLE IF NOT EXISTS `{}` (`{}` INTEGER PRIMARY KEY NOT NULL, `{}` INTEGER DEFAULT 0, `{}` INTEGER DEFAULT 0)",
            stats.table_name, stats.column_id, stats.column_total_visitors, stats.column_last_updated
        );
        sqlx::query(&query).execute(&self.pool).await?;

        let contacts = &config.database_structure.contacts;
        info!("{} Creating table {}", LOG_PREFIX, contacts.table_name);
        let query = format!(
            "CREATE TABLE IF NOT EXISTS `{}` (`{}` TEXT PRIMARY KEY NOT NULL, `{}` TEXT NOT NULL, `{}` TEXT NOT NULL, `{}` TEXT NOT NULL, `{}` INTEGER NOT NULL, `{}` TEXT NOT NULL, `{}` TEXT NOT NULL)",
            contacts.table_name, contacts.column_id, contacts.column_name, contacts.column_email, contacts.column_message,
            contacts.column_submitted_at, contacts.column_status, contacts.column_origin
        );
        sqlx::query(&query).execute(&self.pool).await?;

        Ok(())
    }

    pub async fn record_visit(&self, config: &Configuration, event: &VisitEvent) -> Result<(), Error>
    {
        let visits = &config.database_structure.visits;
        let stats = &config.database_structure.stats;
        let mut transaction = self.pool.begin().await?;

        let query = format!(
            "INSERT INTO `{}` (`{}`, `{}`, `{}`, `{}`) VALUES (?, ?, ?, ?)",
            visits.table_name, visits.column_origin, visits.column_signature, visits.column_observed_at, visits.column_path
        );
        sqlx::query(&query)
            .bind(&event.origin_address)
            .bind(&event.client_signature)
            .bind(event.observed_at)
            .bind(&event.path)
            .execute(&mut *transaction)
            .await?;

        let query = format!(
            "INSERT INTO `{}` (`{}`, `{}`, `{}`) VALUES (1, 1, ?) ON CONFLICT (`{}`) DO UPDATE SET `{}` = `{}` + 1, `{}` = excluded.`{}`",
            stats.table_name, stats.column_id, stats.column_total_visitors, stats.column_last_updated,
            stats.column_id, stats.column_total_visitors, stats.column_total_visitors, stats.column_last_updated, stats.column_last_updated
        );
        sqlx::query(&query)
            .bind(current_time())
            .execute(&mut *transaction)
            .await?;

        transaction.commit().await
    }

    pub async fn aggregate_stats(&self, config: &Configuration) -> Result<Option<AggregateStats>, Error>
    {
        let stats = &config.database_structure.stats;
        let query = format!(
            "SELECT `{}`, `{}` FROM `{}` WHERE `{}` = 1",
            stats.column_total_visitors, stats.column_last_updated, stats.table_name, stats.column_id
        );
        match sqlx::query(&query).fetch_optional(&self.pool).await? {
            None => { Ok(None) }
            Some(row) => {
                Ok(Some(AggregateStats {
                    total_visitors: row.try_get::<i64, _>(stats.column_total_visitors.as_str())?.max(0) as u64,
                    last_updated: row.try_get::<i64, _>(stats.column_last_updated.as_str())?,
                }))
            }
        }
    }

    pub async fn recent_visits(&self, config: &Configuration, limit: u64) -> Result<Vec<VisitEvent>, Error>
    {
        let visits = &config.database_structure.visits;
        let query = format!(
            "SELECT `{}`, `{}`, `{}`, `{}` FROM `{}` ORDER BY `{}` DESC LIMIT {}",
            visits.column_origin, visits.column_signature, visits.column_observed_at, visits.column_path,
            visits.table_name, visits.column_id, limit
        );
        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;
        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            entries.push(VisitEvent {
                origin_address: row.try_get(visits.column_origin.as_str())?,
                client_signature: row.try_get(visits.column_signature.as_str())?,
                observed_at: row.try_get(visits.column_observed_at.as_str())?,
                path: row.try_get(visits.column_path.as_str())?,
            });
        }
        Ok(entries)
    }

    pub async fn insert_contact(&self, config: &Configuration, contact: &ContactSubmission) -> Result<(), Error>
    {
        let contacts = &config.database_structure.contacts;
        let query = format!(
            "INSERT INTO `{}` (`{}`, `{}`, `{}`, `{}`, `{}`, `{}`, `{}`) VALUES (?, ?, ?, ?, ?, ?, ?)",
            contacts.table_name, contacts.column_id, contacts.column_name, contacts.column_email, contacts.column_message,
            contacts.column_submitted_at, contacts.column_status, contacts.column_origin
        );
        sqlx::query(&query)
            .bind(&contact.id)
            .bind(&contact.name)
            .bind(&contact.email)
            .bind(&contact.message)
            .bind(contact.submitted_at)
            .bind(contact.status.as_str())
            .bind(&contact.origin_address)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn list_contacts(&self, config: &Configuration, limit: u64) -> Result<Vec<ContactSubmission>, Error>
    {
        let contacts = &config.database_structure.contacts;
        /* The status column is not selected; this service only ever writes
           ContactStatus::New. */
        let query = format!(
            "SELECT `{}`, `{}`, `{}`, `{}`, `{}`, `{}` FROM `{}` ORDER BY `{}` DESC LIMIT {}",
            contacts.column_id, contacts.column_name, contacts.column_email, contacts.column_message,
            contacts.column_submitted_at, contacts.column_origin,
            contacts.table_name, contacts.column_submitted_at, limit
        );
        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;
        let mut entries = Vec::with_capacity(rows.len());
        for row in rows {
            entries.push(ContactSubmission {
                id: row.try_get(contacts.column_id.as_str())?,
                name: row.try_get(contacts.column_name.as_str())?,
                email: row.try_get(contacts.column_email.as_str())?,
                message: row.try_get(contacts.column_message.as_str())?,
                submitted_at: row.try_get(contacts.column_submitted_at.as_str())?,
                status: ContactStatus::New,
                origin_address: row.try_get(contacts.column_origin.as_str())?,
            });
        }
        Ok(entries)
    }
}
