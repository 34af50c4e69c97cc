use super::destination::DestinationDatabase;
use crate::config::DestinationConfig;
use crate::schema::{Table, TableRow};
use crate::utils::build_upsert_statement;
use anyhow::{Context, Result as AnyhowResult};
use async_trait::async_trait;
use log::{debug, error, info};
use tokio::task::JoinHandle;
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, NoTls, Transaction};

/// Upper bound on rows per upsert statement.
///
/// PostgreSQL accepts at most 65535 bind parameters per statement; the widest table binds
/// ten values per row.
const BATCH_SIZE: usize = 1000;

/// A single PostgreSQL connection receiving the migrated tables.
pub struct PostgresDestination {
    client: Option<Client>,
    connection_task: Option<JoinHandle<()>>,
}

impl PostgresDestination {
    /// Connects to the destination named by `DATABASE_URL`.
    ///
    /// The connection future is driven by a spawned task which ends once the client is
    /// dropped in [`DestinationDatabase::close`].
    ///
    /// # Arguments
    ///
    /// * `config` - Destination settings; `database_url` must be set.
    ///
    /// # Returns
    ///
    /// * `Ok(PostgresDestination)` - Connected destination.
    /// * `Err(anyhow::Error)` - No URL was configured, or the connection failed.
    pub async fn connect(config: &DestinationConfig) -> AnyhowResult<Self> {
        let database_url = config
            .database_url
            .as_deref()
            .context("DATABASE_URL is not set")?;
        let (client, connection) = tokio_postgres::connect(database_url, NoTls)
            .await
            .context("Failed to connect to PostgreSQL")?;
        let connection_task = tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("PostgreSQL connection error: {}", e);
            }
        });
        info!("Connected to PostgreSQL destination");

        Ok(Self {
            client: Some(client),
            connection_task: Some(connection_task),
        })
    }

    fn client(&self) -> AnyhowResult<&Client> {
        self.client.as_ref().context("PostgreSQL destination connection is closed")
    }
}

#[async_trait]
impl DestinationDatabase for PostgresDestination {
    async fn ensure_schema(&mut self) -> AnyhowResult<()> {
        let client = self
            .client
            .as_mut()
            .context("PostgreSQL destination connection is closed")?;
        let transaction = client
            .transaction()
            .await
            .context("Failed to start schema transaction")?;

        match create_tables(&transaction).await {
            Ok(()) => transaction
                .commit()
                .await
                .context("Failed to commit schema transaction"),
            Err(e) => {
                if let Err(rollback_err) = transaction.rollback().await {
                    error!("Failed to roll back schema transaction: {}", rollback_err);
                }
                Err(e)
            }
        }
    }

    async fn begin(&mut self) -> AnyhowResult<()> {
        self.client()?
            .batch_execute("BEGIN")
            .await
            .context("Failed to start data transaction")
    }

    async fn upsert_all<T: TableRow>(&mut self, rows: &[T]) -> AnyhowResult<u64> {
        let client = self.client()?;
        let mut written = 0;
        for chunk in rows.chunks(BATCH_SIZE) {
            written += insert_batch(client, chunk).await?;
        }
        Ok(written)
    }

    async fn commit(&mut self) -> AnyhowResult<()> {
        self.client()?
            .batch_execute("COMMIT")
            .await
            .context("Failed to commit data transaction")
    }

    async fn rollback(&mut self) -> AnyhowResult<()> {
        self.client()?
            .batch_execute("ROLLBACK")
            .await
            .context("Failed to roll back data transaction")
    }

    async fn close(&mut self) -> AnyhowResult<()> {
        drop(self.client.take());
        if let Some(task) = self.connection_task.take() {
            task.await.context("PostgreSQL connection task panicked")?;
        }
        Ok(())
    }
}

/// Creates the `ems`, `leave_applications` and `work_log` tables if they don't already exist.
///
/// `ems` is created first since the other two reference its `Email` column.
///
/// # Arguments
///
/// * `transaction` - Active schema transaction.
///
/// # Returns
///
/// * `Ok(())` - All three tables exist.
/// * `Err(anyhow::Error)` - A statement failed; the caller rolls the transaction back.
async fn create_tables(transaction: &Transaction<'_>) -> AnyhowResult<()> {
    for table in Table::ALL {
        transaction
            .execute(table.create_statement(), &[])
            .await
            .with_context(|| format!("Failed to create {} table", table))?;
        debug!("Ensured destination table {}", table);
    }
    Ok(())
}

/// Executes one multi-row upsert for `batch`.
///
/// Row values are flattened in row order so they line up with the numbered placeholders
/// produced by [`build_upsert_statement`].
async fn insert_batch<T: TableRow>(client: &Client, batch: &[T]) -> AnyhowResult<u64> {
    let mut params: Vec<&(dyn ToSql + Sync)> = Vec::with_capacity(batch.len() * T::TABLE.insert_columns().len());
    for row in batch {
        params.extend(row.params());
    }
    let sql = build_upsert_statement(T::TABLE, batch.len());

    client
        .execute(sql.as_str(), &params)
        .await
        .with_context(|| format!("Failed to upsert batch of {} row(s) into {}", batch.len(), T::TABLE))
}
