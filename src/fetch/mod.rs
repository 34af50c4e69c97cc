//! # Reading the Employee Management Tables from MySQL
//!
//! This module reads the source side of the migration. Each table is read in full with an
//! unconditional `SELECT *` and decoded into the typed rows of [`crate::schema`]. The source
//! is assumed small enough to hold in memory.
//!
//! ## Submodules
//!
//! - **source**: The `SourceDatabase` trait the migrator reads through.
//! - **mysql**: `MySqlSource`, the sqlx-backed implementation.

mod mysql;
mod source;

pub use mysql::MySqlSource;
pub use source::SourceDatabase;
