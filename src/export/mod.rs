//! Tools for writing the migrated tables into PostgreSQL.
//!
//! This module creates the destination schema and upserts rows with batched multi-row
//! `INSERT ... ON CONFLICT` statements. Schema creation commits on its own; the data phase
//! runs inside a single transaction opened and closed by the migrator.
//!
//! ## Submodules
//!
//! - **destination**: The `DestinationDatabase` trait the migrator writes through.
//! - **postgres**: `PostgresDestination`, the tokio-postgres implementation.

mod destination;
mod postgres;

pub use destination::DestinationDatabase;
pub use postgres::PostgresDestination;
