use super::source::SourceDatabase;
use crate::config::SourceConfig;
use crate::schema::TableRow;
use anyhow::{Context, Result as AnyhowResult};
use async_trait::async_trait;
use log::{debug, info};
use sqlx::{ConnectOptions, Connection, MySqlConnection};

/// A single MySQL connection used to read the source tables.
pub struct MySqlSource {
    conn: Option<MySqlConnection>,
}

impl MySqlSource {
    /// Opens the source connection described by `config`.
    ///
    /// # Arguments
    ///
    /// * `config` - Host, user, password and database of the MySQL source.
    ///
    /// # Returns
    ///
    /// * `Ok(MySqlSource)` - Connected source.
    /// * `Err(anyhow::Error)` - The server could not be reached or refused the credentials.
    pub async fn connect(config: &SourceConfig) -> AnyhowResult<Self> {
        let conn = config
            .connect_options()
            .connect()
            .await
            .with_context(|| {
                format!(
                    "Failed to connect to MySQL database {} on {} as {}",
                    config.database, config.host, config.user
                )
            })?;
        info!("Connected to MySQL source {}@{}/{}", config.user, config.host, config.database);
        Ok(Self { conn: Some(conn) })
    }
}

#[async_trait]
impl SourceDatabase for MySqlSource {
    async fn fetch_all<T: TableRow>(&mut self) -> AnyhowResult<Vec<T>> {
        let conn = self.conn.as_mut().context("MySQL source connection is closed")?;
        let sql = format!("SELECT * FROM {}", T::TABLE.name());
        debug!("Source query: {}", sql);
        let rows = sqlx::query_as::<_, T>(&sql)
            .fetch_all(conn)
            .await
            .with_context(|| format!("Failed to read rows from {}", T::TABLE))?;
        Ok(rows)
    }

    async fn close(&mut self) -> AnyhowResult<()> {
        if let Some(conn) = self.conn.take() {
            conn.close().await.context("Failed to close MySQL connection")?;
        }
        Ok(())
    }
}
