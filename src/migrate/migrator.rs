use crate::config::MigrationConfig;
use crate::export::{DestinationDatabase, PostgresDestination};
use crate::fetch::{MySqlSource, SourceDatabase};
use crate::schema::{Employee, LeaveApplication, TableRow, WorkLogEntry};
use anyhow::{Context, Result as AnyhowResult};
use log::{error, info, warn};

/// Rows written per table by a committed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationSummary {
    /// Whether the schema transaction committed. A failed schema step does not stop the run.
    pub schema_ensured: bool,
    pub employees: u64,
    pub leave_applications: u64,
    pub work_log_entries: u64,
}

/// Terminal state of a migration run.
#[derive(Debug)]
pub enum MigrationOutcome {
    /// One or both connections could not be opened; nothing was created or written.
    ConnectionFailed,
    /// All three tables were transferred and the data transaction committed.
    Committed(MigrationSummary),
    /// The data phase failed and its transaction was rolled back in full.
    RolledBack {
        schema_ensured: bool,
        error: anyhow::Error,
    },
}

impl MigrationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, MigrationOutcome::Committed(_))
    }
}

/// Copies the three employee management tables from a source into a destination.
///
/// A `Migrator` owns both connections for the length of one run and closes both when
/// [`run`](Self::run) returns, whatever the outcome.
pub struct Migrator<S, D> {
    source: S,
    destination: D,
}

impl<S: SourceDatabase, D: DestinationDatabase> Migrator<S, D> {
    pub fn new(source: S, destination: D) -> Self {
        Self { source, destination }
    }

    /// Builds a migrator from the results of opening both connections.
    ///
    /// If either connection failed, every failure is reported, the connection that did open
    /// is closed, and `None` is returned so no schema or data work takes place.
    pub async fn from_connections(
        source: AnyhowResult<S>,
        destination: AnyhowResult<D>,
    ) -> Option<Self> {
        match (source, destination) {
            (Ok(source), Ok(destination)) => Some(Self::new(source, destination)),
            (source, destination) => {
                match source {
                    Ok(mut source) => close_quietly(source.close().await, "source"),
                    Err(e) => error!("MySQL connection error: {:#}", e),
                }
                match destination {
                    Ok(mut destination) => close_quietly(destination.close().await, "destination"),
                    Err(e) => error!("PostgreSQL connection error: {:#}", e),
                }
                error!("Failed to connect to one or both databases");
                None
            }
        }
    }

    /// Runs schema creation and the data phase, then closes both connections.
    pub async fn run(mut self) -> MigrationOutcome {
        let outcome = self.execute().await;
        close_quietly(self.source.close().await, "source");
        close_quietly(self.destination.close().await, "destination");
        outcome
    }

    async fn execute(&mut self) -> MigrationOutcome {
        let schema_ensured = match self.destination.ensure_schema().await {
            Ok(()) => {
                info!("PostgreSQL tables created successfully");
                true
            }
            Err(e) => {
                error!("Error creating PostgreSQL tables: {:#}", e);
                warn!("Continuing with the data migration against the existing destination schema");
                false
            }
        };

        match self.transfer_tables(schema_ensured).await {
            Ok(summary) => {
                info!(
                    "Data migration completed successfully: {} employee(s), {} leave application(s), {} work log entries",
                    summary.employees, summary.leave_applications, summary.work_log_entries
                );
                MigrationOutcome::Committed(summary)
            }
            Err(e) => {
                error!("Error during migration: {:#}", e);
                match self.destination.rollback().await {
                    Ok(()) => info!("Destination data transaction rolled back"),
                    Err(rollback_err) => error!("{:#}", rollback_err),
                }
                MigrationOutcome::RolledBack {
                    schema_ensured,
                    error: e,
                }
            }
        }
    }

    /// The data phase: one transaction covering all three tables, committed only if every
    /// table transferred.
    async fn transfer_tables(&mut self, schema_ensured: bool) -> AnyhowResult<MigrationSummary> {
        self.destination.begin().await?;

        let employees = self.transfer::<Employee>().await?;
        let leave_applications = self.transfer::<LeaveApplication>().await?;
        let work_log_entries = self.transfer::<WorkLogEntry>().await?;

        self.destination.commit().await?;

        Ok(MigrationSummary {
            schema_ensured,
            employees,
            leave_applications,
            work_log_entries,
        })
    }

    async fn transfer<T: TableRow>(&mut self) -> AnyhowResult<u64> {
        let table = T::TABLE;
        let rows: Vec<T> = self
            .source
            .fetch_all()
            .await
            .with_context(|| format!("Failed to fetch {} from source", table))?;
        info!("Read {} row(s) from source table {}", rows.len(), table);

        if rows.is_empty() {
            info!("Source table {} is empty, skipping", table);
            return Ok(0);
        }

        let written = self
            .destination
            .upsert_all(rows.as_slice())
            .await
            .with_context(|| format!("Failed to migrate {}", table))?;
        info!("Upserted {} row(s) into {}", written, table);
        Ok(written)
    }
}

fn close_quietly(result: AnyhowResult<()>, side: &str) {
    if let Err(e) = result {
        warn!("Failed to close {} connection: {:#}", side, e);
    }
}

/// Migrates the employee management tables from MySQL into PostgreSQL.
///
/// Opens both connections from `config`, ensures the destination schema, copies `ems`,
/// `leave_applications` and `work_log` in that order inside one transaction, and closes both
/// connections. Failures are reported through the log and the returned outcome; nothing is
/// propagated to the caller.
///
/// # Examples
///
/// ```rust,no_run
/// use clap::Parser;
/// use ems_migrate::config::MigrationConfig;
/// use ems_migrate::migrate::migrate;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let config = MigrationConfig::parse();
///     let outcome = migrate(&config).await;
///     println!("success: {}", outcome.is_success());
/// }
/// ```
pub async fn migrate(config: &MigrationConfig) -> MigrationOutcome {
    let source = MySqlSource::connect(&config.source).await;
    let destination = PostgresDestination::connect(&config.destination).await;

    match Migrator::from_connections(source, destination).await {
        Some(migrator) => migrator.run().await,
        None => MigrationOutcome::ConnectionFailed,
    }
}
