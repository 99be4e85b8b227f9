//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`database`] - Connection pool lifecycle
//! - [`persistence`] - PostgreSQL repository implementations

pub mod database;
pub mod persistence;

pub use database::Database;
