//! # Employee Management Schema
//!
//! This module describes the three tables copied by the migration: their names, the columns
//! written on upsert, the conflict policy of each table and the destination DDL. It also
//! defines the typed row buffers read from MySQL and bound into PostgreSQL statements.
//!
//! ## Submodules
//!
//! - **tables**: The `Table` enum with per-table metadata and DDL.
//! - **types**: Row types (`Employee`, `LeaveApplication`, `WorkLogEntry`) and the `TableRow` trait.

mod tables;
mod types;

pub use tables::Table;
pub use types::{Employee, LeaveApplication, TableRow, WorkLogEntry};
