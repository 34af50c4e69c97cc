//! # Migrating the Employee Management Schema
//!
//! This module runs the migration end to end: open both connections, ensure the destination
//! schema, transfer `ems`, `leave_applications` and `work_log` in that order inside one
//! transaction, then close both connections.
//!
//! The run is all-or-nothing for the data phase. Schema creation commits separately and a
//! failure there is reported without stopping the run.
//!
//! ## Submodules
//!
//! - **migrator**: The `Migrator`, its outcome types and the top-level `migrate` entry point.

mod migrator;

pub use migrator::{migrate, MigrationOutcome, MigrationSummary, Migrator};
