use crate::schema::TableRow;
use anyhow::Result as AnyhowResult;
use async_trait::async_trait;

/// Read side of a migration.
///
/// A source hands back every row of a table in one call; there is no paging or ordering.
#[async_trait]
pub trait SourceDatabase: Send {
    /// Reads all rows of `T::TABLE`.
    async fn fetch_all<T: TableRow>(&mut self) -> AnyhowResult<Vec<T>>;

    /// Releases the connection. Calling it more than once is a no-op.
    async fn close(&mut self) -> AnyhowResult<()>;
}
