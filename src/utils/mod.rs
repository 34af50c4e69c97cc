//! # Utility Functions for the Migration
//!
//! This module provides general helpers used by the destination writer.
//!
//! ## Submodules
//!
//! - **sql**: Builds numbered placeholder lists and bulk upsert statements.

mod sql;

pub use sql::build_upsert_statement;
