use crate::schema::TableRow;
use anyhow::Result as AnyhowResult;
use async_trait::async_trait;

/// Write side of a migration.
///
/// Schema creation runs in its own transaction. The data phase is bracketed by
/// [`begin`](Self::begin) and [`commit`](Self::commit) / [`rollback`](Self::rollback), and every
/// [`upsert_all`](Self::upsert_all) in between shares that transaction.
#[async_trait]
pub trait DestinationDatabase: Send {
    /// Creates the destination tables if absent and commits. Rolls back on failure.
    async fn ensure_schema(&mut self) -> AnyhowResult<()>;

    /// Opens the data-phase transaction.
    async fn begin(&mut self) -> AnyhowResult<()>;

    /// Upserts `rows` into `T::TABLE`, returning the number of rows written.
    ///
    /// Callers skip empty row sets; implementations issue no statement for them either.
    async fn upsert_all<T: TableRow>(&mut self, rows: &[T]) -> AnyhowResult<u64>;

    async fn commit(&mut self) -> AnyhowResult<()>;

    async fn rollback(&mut self) -> AnyhowResult<()>;

    /// Releases the connection. Calling it more than once is a no-op.
    async fn close(&mut self) -> AnyhowResult<()>;
}
