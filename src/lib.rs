//! EMS Migrate Library
//!
//! This library copies the employee management tables (`ems`, `leave_applications`,
//! `work_log`) from a MySQL database into PostgreSQL, creating the destination schema if
//! needed and upserting every row in a single transaction.

pub mod config;
pub mod export;
pub mod fetch;
pub mod migrate;
pub mod schema;
mod utils;
